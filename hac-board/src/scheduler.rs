//! Background task scheduler
//!
//! The background loop polls the HAL tick and steps the scheduler once per
//! tick. A task is an id with a period in ticks; the caller maps ids to
//! work, so tasks can borrow whatever the loop owns.
//!
//! ```ignore
//! let led = sched.add(500)?;
//! let fsi = sched.add(1)?;
//! loop {
//!     sched.poll(hal.tick(), |task| {
//!         if task == led {
//!             let _ = hal.led_toggle();
//!         } else if task == fsi {
//!             let _ = link.run();
//!         }
//!     });
//! }
//! ```

use hac_core::{debug, Error};
use heapless::Vec;

/// Default task capacity
pub const MAX_TASKS: usize = 8;

/// Registered task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskId(u8);

impl TaskId {
    pub fn index(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Task {
    period: u32,
    remaining: u32,
    enabled: bool,
}

/// Fixed-capacity periodic scheduler
#[derive(Debug)]
pub struct Scheduler<const N: usize = MAX_TASKS> {
    tasks: Vec<Task, N>,
    ticks: u32,
}

impl<const N: usize> Scheduler<N> {
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            ticks: 0,
        }
    }

    /// Register a task running every `period` ticks
    ///
    /// The first run is `period` ticks from now.
    pub fn add(&mut self, period: u32) -> Result<TaskId, Error> {
        if period == 0 {
            return Err(Error::Range);
        }
        let id = TaskId(self.tasks.len() as u8);
        self.tasks
            .push(Task {
                period,
                remaining: period,
                enabled: true,
            })
            .map_err(|_| Error::Unavailable)?;
        debug!("Task {} every {} ticks", id.0, period);
        Ok(id)
    }

    /// Suspend or resume a task
    ///
    /// A resumed task waits a full period before its next run.
    pub fn set_enabled(&mut self, id: TaskId, enabled: bool) -> Result<(), Error> {
        let task = self
            .tasks
            .get_mut(usize::from(id.0))
            .ok_or(Error::Range)?;
        if enabled && !task.enabled {
            task.remaining = task.period;
        }
        task.enabled = enabled;
        Ok(())
    }

    /// Ticks stepped so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Advance one tick and run the tasks that fall due
    ///
    /// Due tasks run in registration order.
    ///
    /// # Returns
    /// Number of tasks run
    pub fn step(&mut self, mut run: impl FnMut(TaskId)) -> usize {
        self.ticks = self.ticks.wrapping_add(1);
        let mut count = 0;
        for (i, task) in self.tasks.iter_mut().enumerate() {
            if !task.enabled {
                continue;
            }
            task.remaining -= 1;
            if task.remaining == 0 {
                task.remaining = task.period;
                run(TaskId(i as u8));
                count += 1;
            }
        }
        count
    }

    /// Step only when the tick has `fired`
    pub fn poll(&mut self, fired: bool, run: impl FnMut(TaskId)) -> usize {
        if fired {
            self.step(run)
        } else {
            0
        }
    }
}

impl<const N: usize> Default for Scheduler<N> {
    fn default() -> Self {
        Self::new()
    }
}
