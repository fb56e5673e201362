use core::cell::Cell;

use critical_section::Mutex;

/// Result of a single tick of the [`DelayCountdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Countdown {
    /// The countdown was already zero before this tick
    Idle,

    /// The countdown was decremented by this tick
    Running,
}

impl Countdown {
    pub const fn is_idle(self) -> bool {
        matches!(self, Countdown::Idle)
    }
}

/// Milliseconds remaining before the current note ends.
///
/// The main context starts it, the tick handler counts it down. The value is
/// wider than a byte, so both sides go through a critical section.
pub struct DelayCountdown {
    remaining: Mutex<Cell<u16>>,
}

impl DelayCountdown {
    pub const fn new() -> Self {
        Self {
            remaining: Mutex::new(Cell::new(0)),
        }
    }

    /// Starts a new delay. The previous one must have run out.
    pub fn start(&self, duration_ms: u16) {
        critical_section::with(|cs| {
            let remaining = self.remaining.borrow(cs);
            debug_assert_eq!(remaining.get(), 0, "countdown restarted while running");
            remaining.set(duration_ms);
        });
    }

    pub fn tick(&self) -> Countdown {
        critical_section::with(|cs| {
            let remaining = self.remaining.borrow(cs);

            match remaining.get() {
                0 => Countdown::Idle,
                value => {
                    remaining.set(value - 1);
                    Countdown::Running
                }
            }
        })
    }

    pub fn is_zero(&self) -> bool {
        self.remaining() == 0
    }

    pub fn remaining(&self) -> u16 {
        critical_section::with(|cs| self.remaining.borrow(cs).get())
    }
}

impl Default for DelayCountdown {
    fn default() -> Self {
        Self::new()
    }
}
