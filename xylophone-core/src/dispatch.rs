use crate::{
    hw::{InputLines, Spin, SymbolSink},
    sequencer::NoteSequencer,
    song::SongBook,
    state::SharedState,
    symbol::{Mode, Symbol},
    CHANNEL_COUNT,
};

/// The main loop: samples every button and acts on debounced presses
pub struct Dispatcher<'a, I, S, W> {
    state: &'a SharedState,
    sequencer: NoteSequencer<'a>,
    inputs: I,
    sink: S,
    spin: W,
}

impl<'a, I, S, W> Dispatcher<'a, I, S, W>
where
    I: InputLines,
    S: SymbolSink,
    W: Spin,
{
    pub fn new(state: &'a SharedState, songs: SongBook<'a>, inputs: I, sink: S, spin: W) -> Self {
        Self {
            state,
            sequencer: NoteSequencer::new(songs, state.countdown()),
            inputs,
            sink,
            spin,
        }
    }

    /// One pass over all channels in index order.
    ///
    /// A song started here blocks the pass until it ends; channels after it are
    /// sampled only once playback is over.
    pub fn poll(&mut self) {
        let channels = self.state.channels();

        for channel in 0..CHANNEL_COUNT {
            channels.sample(channel, self.inputs.is_pressed(channel));

            if !channels.check_fire(channel) {
                continue;
            }

            match self.inputs.mode() {
                Mode::Direct => {
                    if let Some(symbol) = Symbol::from_channel(channel) {
                        trace!("channel {} fired", channel);
                        self.sink.emit(symbol);
                    }
                }
                Mode::Song => {
                    self.sequencer.play(channel, &mut self.sink, &mut self.spin);
                }
            }
        }
    }

    pub fn run(mut self) -> ! {
        loop {
            self.poll();
        }
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{song::SONGS, DEBOUNCE_THRESHOLD};

    #[derive(Default)]
    struct Lines {
        pressed: [bool; CHANNEL_COUNT],
        mode: Mode,
        mode_reads: usize,
    }

    impl InputLines for Lines {
        fn is_pressed(&mut self, channel: usize) -> bool {
            self.pressed[channel]
        }

        fn mode(&mut self) -> Mode {
            self.mode_reads += 1;
            self.mode
        }
    }

    struct NoSpin;

    impl Spin for NoSpin {
        fn spin(&mut self) {
            panic!("nothing should be playing");
        }
    }

    #[test]
    fn direct_press_emits_channel_digit() {
        let state = SharedState::new(DEBOUNCE_THRESHOLD);
        let mut emitted = Vec::new();
        let mut dispatcher = Dispatcher::new(
            &state,
            SongBook::new(&SONGS),
            Lines::default(),
            |symbol: Symbol| emitted.push(symbol.to_ascii()),
            NoSpin,
        );

        dispatcher.inputs_mut().pressed[6] = true;
        for _ in 0..DEBOUNCE_THRESHOLD {
            dispatcher.poll();
            state.tick();
        }
        dispatcher.poll();
        dispatcher.poll();

        assert_eq!(dispatcher.inputs_mut().mode_reads, 1);
        drop(dispatcher);
        assert_eq!(emitted, [b'6']);
    }

    #[test]
    fn mode_is_read_per_fire() {
        let state = SharedState::new(DEBOUNCE_THRESHOLD);
        let mut emitted = Vec::new();
        let mut dispatcher = Dispatcher::new(
            &state,
            SongBook::new(&[]),
            Lines::default(),
            |symbol: Symbol| emitted.push(symbol.to_ascii()),
            NoSpin,
        );

        let lines = dispatcher.inputs_mut();
        lines.pressed[1] = true;
        lines.pressed[4] = true;
        lines.mode = Mode::Song;

        for _ in 0..DEBOUNCE_THRESHOLD {
            dispatcher.poll();
            state.tick();
        }
        dispatcher.poll();

        // Both channels fired in song mode but there are no songs to play
        assert_eq!(dispatcher.inputs_mut().mode_reads, 2);
        drop(dispatcher);
        assert!(emitted.is_empty());
    }
}
