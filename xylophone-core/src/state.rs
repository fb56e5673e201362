use crate::{
    countdown::DelayCountdown,
    debounce::ChannelBank,
    CHANNEL_COUNT,
};

/// State shared between the tick interrupt and the main loop
pub struct SharedState {
    countdown: DelayCountdown,
    channels: ChannelBank<CHANNEL_COUNT>,
}

impl SharedState {
    pub const fn new(threshold: u8) -> Self {
        Self {
            countdown: DelayCountdown::new(),
            channels: ChannelBank::new(threshold),
        }
    }

    /// The tick handler.
    ///
    /// Debounce only advances on ticks where the countdown was already idle, so
    /// no button accumulates hold time while a note is sounding.
    pub fn tick(&self) {
        if self.countdown.tick().is_idle() {
            self.channels.advance_all();
        }
    }

    pub fn countdown(&self) -> &DelayCountdown {
        &self.countdown
    }

    pub fn channels(&self) -> &ChannelBank<CHANNEL_COUNT> {
        &self.channels
    }
}
