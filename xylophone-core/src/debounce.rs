use core::cell::RefCell;

use critical_section::Mutex;

/// Debounce state of a single button input.
///
/// `active` is written by the main loop from the raw pin level, `pressed_cycles`
/// accumulates in the tick handler while the button is held. `reported` latches
/// after the press has fired so a held button fires once until it is released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    active: bool,
    pressed_cycles: u8,
    reported: bool,
}

impl Channel {
    pub const fn new() -> Self {
        Self {
            active: false,
            pressed_cycles: 0,
            reported: false,
        }
    }

    pub fn sample(&mut self, raw_active: bool) {
        self.active = raw_active;
    }

    /// Called once per eligible tick. Counts saturate at `threshold`.
    pub fn advance(&mut self, threshold: u8) {
        if self.active {
            if self.pressed_cycles < threshold {
                self.pressed_cycles += 1;
            }
        } else {
            self.pressed_cycles = 0;
            self.reported = false;
        }
    }

    /// Returns true on the transition into the debounced state, once per press.
    pub fn check_fire(&mut self, threshold: u8) -> bool {
        if self.pressed_cycles >= threshold && !self.reported {
            self.reported = true;
            self.pressed_cycles = 0;
            true
        } else {
            false
        }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn pressed_cycles(&self) -> u8 {
        self.pressed_cycles
    }

    pub const fn is_reported(&self) -> bool {
        self.reported
    }
}

/// A fixed set of channels shared between the tick handler and the main loop.
///
/// Every access runs inside a critical section: `check_fire` is a
/// read-modify-write over fields the tick handler also writes.
pub struct ChannelBank<const N: usize> {
    channels: Mutex<RefCell<[Channel; N]>>,
    threshold: u8,
}

impl<const N: usize> ChannelBank<N> {
    /// `threshold` must be non-zero, otherwise an idle channel would fire.
    pub const fn new(threshold: u8) -> Self {
        debug_assert!(threshold > 0, "debounce threshold must be non-zero");

        Self {
            channels: Mutex::new(RefCell::new([Channel::new(); N])),
            threshold,
        }
    }

    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Main context: records the current raw level of `channel`
    pub fn sample(&self, channel: usize, raw_active: bool) {
        critical_section::with(|cs| {
            if let Some(state) = self.channels.borrow(cs).borrow_mut().get_mut(channel) {
                state.sample(raw_active);
            }
        });
    }

    /// Tick context: advances every channel by one tick
    pub fn advance_all(&self) {
        let threshold = self.threshold;

        critical_section::with(|cs| {
            for state in self.channels.borrow(cs).borrow_mut().iter_mut() {
                state.advance(threshold);
            }
        });
    }

    /// Main context: consumes a debounced press on `channel`, if there is one
    pub fn check_fire(&self, channel: usize) -> bool {
        let threshold = self.threshold;

        critical_section::with(|cs| {
            self.channels
                .borrow(cs)
                .borrow_mut()
                .get_mut(channel)
                .is_some_and(|state| state.check_fire(threshold))
        })
    }

    pub fn snapshot(&self, channel: usize) -> Option<Channel> {
        critical_section::with(|cs| self.channels.borrow(cs).borrow().get(channel).copied())
    }
}
