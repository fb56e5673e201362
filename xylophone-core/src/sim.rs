//! Deterministic model of the two execution contexts.
//!
//! Time only advances through simulated ticks: one tick between dispatch
//! passes, and one per spin while the sequencer waits for a note to end.

use core::cell::Cell;

use crate::{
    dispatch::Dispatcher,
    hw::{InputLines, Spin},
    song::SongBook,
    state::SharedState,
    symbol::{Mode, Symbol},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    Press(usize),
    Release(usize),
    Mode(Mode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedEvent {
    /// Tick at which the input changes
    pub at: u32,
    pub event: InputEvent,
}

impl TimedEvent {
    pub const fn new(at: u32, event: InputEvent) -> Self {
        Self { at, event }
    }
}

/// Scripted input changes. Events that are due are applied in slice order;
/// every button starts released and the mode starts as [`Mode::Direct`].
#[derive(Debug, Clone, Copy)]
pub struct Timeline<'a> {
    events: &'a [TimedEvent],
}

impl<'a> Timeline<'a> {
    pub const fn new(events: &'a [TimedEvent]) -> Self {
        Self { events }
    }

    fn due(&self, now: u32) -> impl Iterator<Item = InputEvent> + 'a {
        self.events
            .iter()
            .filter(move |event| event.at <= now)
            .map(|event| event.event)
    }

    pub fn is_pressed(&self, channel: usize, now: u32) -> bool {
        self.due(now).fold(false, |pressed, event| match event {
            InputEvent::Press(ch) if ch == channel => true,
            InputEvent::Release(ch) if ch == channel => false,
            _ => pressed,
        })
    }

    pub fn mode(&self, now: u32) -> Mode {
        self.due(now).fold(Mode::default(), |mode, event| match event {
            InputEvent::Mode(next) => next,
            _ => mode,
        })
    }
}

#[derive(Clone, Copy)]
struct SimClock<'a> {
    state: &'a SharedState,
    now: &'a Cell<u32>,
}

impl Spin for SimClock<'_> {
    fn spin(&mut self) {
        self.state.tick();
        self.now.set(self.now.get() + 1);
    }
}

struct SimInputs<'a> {
    timeline: Timeline<'a>,
    now: &'a Cell<u32>,
}

impl InputLines for SimInputs<'_> {
    fn is_pressed(&mut self, channel: usize) -> bool {
        self.timeline.is_pressed(channel, self.now.get())
    }

    fn mode(&mut self) -> Mode {
        self.timeline.mode(self.now.get())
    }
}

pub struct Simulator<'a> {
    state: SharedState,
    songs: SongBook<'a>,
    timeline: Timeline<'a>,
    now: Cell<u32>,
}

impl<'a> Simulator<'a> {
    pub fn new(threshold: u8, songs: SongBook<'a>, timeline: Timeline<'a>) -> Self {
        Self {
            state: SharedState::new(threshold),
            songs,
            timeline,
            now: Cell::new(0),
        }
    }

    /// Ticks elapsed so far
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    /// Runs for at least `ticks` ticks, reporting every emitted symbol with the
    /// tick it was emitted at. A song that is still playing at the deadline
    /// runs to completion.
    pub fn run<F>(&self, ticks: u32, mut on_emit: F)
    where
        F: FnMut(u32, Symbol),
    {
        let now = &self.now;
        let end = now.get().saturating_add(ticks);

        let mut clock = SimClock {
            state: &self.state,
            now,
        };
        let inputs = SimInputs {
            timeline: self.timeline,
            now,
        };
        let sink = move |symbol: Symbol| on_emit(now.get(), symbol);

        let mut dispatcher = Dispatcher::new(&self.state, self.songs, inputs, sink, clock);

        loop {
            dispatcher.poll();

            if now.get() >= end {
                break;
            }

            clock.spin();
        }
    }
}
