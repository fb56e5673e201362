#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod countdown;
pub mod debounce;
pub mod dispatch;
pub mod hw;
pub mod sequencer;
pub mod sim;
pub mod song;
pub mod state;
pub mod symbol;

/// Number of button inputs on the instrument
pub const CHANNEL_COUNT: usize = 8;

/// Consecutive eligible ticks a button must be held before it fires
pub const DEBOUNCE_THRESHOLD: u8 = 12;

/// Period of the tick interrupt. Song durations and the debounce threshold are
/// expressed in units of this period.
pub const TICK_PERIOD_US: u64 = 1_000;

pub use countdown::{Countdown, DelayCountdown};
pub use debounce::{Channel, ChannelBank};
pub use dispatch::Dispatcher;
pub use hw::{BusyWait, InputLines, Spin, SymbolSink};
pub use sequencer::NoteSequencer;
pub use song::{Note, Song, SongBook, SONGS};
pub use state::SharedState;
pub use symbol::{Mode, Symbol};
