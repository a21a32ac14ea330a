//! Fast serial interface (FSI) port
//!
//! One transmitter and one receiver, single lane, 16-word software frame
//! size.

/// Words per data frame
pub const FRAME_WORDS: usize = 16;

/// Receive/transmit event flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Events(pub u16);

impl Events {
    pub const NONE: Self = Self(0);
    /// Frame completely received or transmitted
    pub const FRAME_DONE: Self = Self(1 << 0);
    /// Ping frame received
    pub const PING_FRAME: Self = Self(1 << 1);
    /// Data frame received
    pub const DATA_FRAME: Self = Self(1 << 2);
    /// CRC error on a received frame
    pub const CRC_ERR: Self = Self(1 << 3);
    /// No ping within the watchdog period
    pub const PING_WD_TIMEOUT: Self = Self(1 << 4);

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// FSI port
pub trait FsiPort {
    /// Initialize transmitter and receiver
    ///
    /// # Arguments
    /// * `prescaler` - Transmit clock prescaler from SYSCLK
    fn init(&self, prescaler: u16);

    /// Run the transmit flush sequence
    fn flush(&self);

    /// Software-triggered transmission, ping watchdog and external ping
    /// trigger disabled
    fn set_software_mode(&self);

    /// Externally triggered ping transmission with tag 1 and the receive
    /// ping watchdog armed
    ///
    /// # Arguments
    /// * `trigger` - External ping trigger source
    /// * `watchdog` - Watchdog period in SYSCLK ticks
    fn set_ping_mode(&self, trigger: u16, watchdog: u32);

    /// Transmit a ping frame carrying `tag`
    fn send_ping(&self, tag: u8);

    /// Transmit a 16-word data frame
    fn send_data(&self, user: u8, data: &[u16; FRAME_WORDS]);

    /// Receive event flags
    fn rx_events(&self) -> Events;

    /// Clear receive event flags
    fn clear_rx_events(&self, events: Events);

    /// Tag of the last received ping
    fn rx_ping_tag(&self) -> u8;

    /// Word count of the last received data frame
    fn rx_word_count(&self) -> u16;

    /// User data field of the last received data frame
    fn rx_user_data(&self) -> u8;

    /// Copy the receive buffer
    fn read_rx(&self, data: &mut [u16; FRAME_WORDS]);

    /// Transmit event flags
    fn tx_events(&self) -> Events;

    /// Clear transmit event flags
    fn clear_tx_events(&self, events: Events);

    /// Receiver core reports an error requiring reset
    fn rx_core_error(&self) -> bool;

    /// Pulse the receiver core reset
    fn reset_rx(&self);
}
