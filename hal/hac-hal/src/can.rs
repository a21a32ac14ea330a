//! CAN controller port
//!
//! Mailbox-level access to the controller. Mailboxes are numbered from 1.
//! Which mailbox serves which purpose is decided by the transport driver.

/// Raw bit-timing parameters
///
/// Values are the logical lengths; the port applies any "minus one"
/// register encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTiming {
    /// Baud rate prescaler
    pub brp: u16,
    /// Time segment before the sample point (quanta, includes propagation)
    pub tseg1: u16,
    /// Time segment after the sample point (quanta)
    pub tseg2: u16,
    /// Synchronization jump width (quanta)
    pub sjw: u16,
}

/// Message as stored in a mailbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Message {
    /// Identifier (11 or 29 bits)
    pub id: u32,
    /// Extended (29-bit) identifier
    pub extended: bool,
    /// Remote transmission request
    pub remote: bool,
    /// Data length code (0..8)
    pub len: u8,
    /// Payload
    pub data: [u8; 8],
}

/// Mailbox direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MailboxDir {
    Receive,
    Transmit,
}

/// Mailbox setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MailboxConfig {
    pub dir: MailboxDir,
    /// Extended identifier of the mailbox
    pub id: u32,
    /// Acceptance mask, 1 bits must match `id`
    pub mask: u32,
    /// Reject new messages while an unread one is pending
    pub overwrite_protect: bool,
}

/// CAN controller port
///
/// `index` selects the controller (0 is CAN-A).
pub trait CanPort {
    /// Reset the controller and leave it in initialization mode
    fn init(&self, index: u8);

    /// Request or release configuration mode
    fn request_config(&self, index: u8, on: bool);

    /// True once the controller acknowledged configuration mode
    fn config_acknowledged(&self, index: u8) -> bool;

    /// Program bit timing (only effective in configuration mode)
    fn set_bit_timing(&self, index: u8, timing: &BitTiming);

    /// Disable a mailbox and drop its contents
    fn clear_mailbox(&self, index: u8, mbox: u8);

    /// Configure and enable a mailbox
    fn configure_mailbox(&self, index: u8, mbox: u8, cfg: &MailboxConfig);

    /// Take the pending message of a receive mailbox, acknowledging it
    fn receive(&self, index: u8, mbox: u8) -> Option<Message>;

    /// True while a transmit request of the mailbox is pending
    fn tx_pending(&self, index: u8, mbox: u8) -> bool;

    /// Load a message into a transmit mailbox without requesting it
    fn load(&self, index: u8, mbox: u8, msg: &Message);

    /// Request transmission of a loaded mailbox
    fn request_tx(&self, index: u8, mbox: u8);
}
