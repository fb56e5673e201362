use xylophone_core::{
    sim::{InputEvent, Simulator, TimedEvent, Timeline},
    song, Mode, Song, SongBook, DEBOUNCE_THRESHOLD, SONGS,
};

fn emitted(simulator: &Simulator, ticks: u32) -> Vec<(u32, char)> {
    let mut out = Vec::new();
    simulator.run(ticks, |tick, symbol| out.push((tick, symbol.to_ascii() as char)));
    out
}

fn press(at: u32, channel: usize) -> TimedEvent {
    TimedEvent::new(at, InputEvent::Press(channel))
}

fn release(at: u32, channel: usize) -> TimedEvent {
    TimedEvent::new(at, InputEvent::Release(channel))
}

fn mode(at: u32, mode: Mode) -> TimedEvent {
    TimedEvent::new(at, InputEvent::Mode(mode))
}

#[test]
fn direct_press_fires_once_at_threshold() {
    let events = [press(0, 3), release(20, 3)];
    let simulator = Simulator::new(12, SongBook::builtin(), Timeline::new(&events));

    assert_eq!(emitted(&simulator, 100), [(12, '3')]);
}

#[test]
fn repress_fires_again() {
    let events = [press(0, 3), release(20, 3), press(40, 3), release(60, 3)];
    let simulator = Simulator::new(12, SongBook::builtin(), Timeline::new(&events));

    assert_eq!(emitted(&simulator, 100), [(12, '3'), (52, '3')]);
}

#[test]
fn short_press_never_fires() {
    let threshold = DEBOUNCE_THRESHOLD as u32;
    let events = [
        press(0, 1),
        release(threshold - 1, 1),
        press(100, 1),
        release(100 + threshold - 1, 1),
    ];
    let simulator = Simulator::new(DEBOUNCE_THRESHOLD, SongBook::builtin(), Timeline::new(&events));

    assert!(emitted(&simulator, 500).is_empty());
}

#[test]
fn held_button_does_not_repeat() {
    let events = [press(0, 0), press(0, 7)];
    let simulator = Simulator::new(12, SongBook::builtin(), Timeline::new(&events));

    assert_eq!(emitted(&simulator, 10_000), [(12, '0'), (12, '7')]);
}

#[test]
fn song_blocks_for_each_note() {
    const SONGS: [Song; 1] = [song!(
        "scenario",
        [
            (2, 500), (2, 500), (4, 1000), (1, 250), (1, 250),
            (1, 250), (1, 250), (1, 250), (1, 250), (1, 250),
            (1, 250), (1, 250), (1, 250), (1, 250), (1, 250),
            (1, 250), (1, 250), (1, 250), (1, 250), (1, 250),
        ]
    )];

    let events = [mode(0, Mode::Song), press(0, 0), release(100, 0)];
    let simulator = Simulator::new(12, SongBook::new(&SONGS), Timeline::new(&events));
    let out = emitted(&simulator, 12);

    let mut expected = Vec::new();
    let mut at = 12;
    for note in SONGS[0].notes {
        expected.push((at, note.symbol.to_ascii() as char));
        at += note.duration_ms as u32;
    }

    assert_eq!(out.len(), 20);
    assert_eq!(&out[..3], [(12, '2'), (512, '2'), (1012, '4')]);
    assert_eq!(out, expected);

    // The run could not return before the song ended
    assert_eq!(simulator.now(), 12 + SONGS[0].total_duration_ms());
}

#[test]
fn playback_suspends_debounce_for_every_channel() {
    const SONGS: [Song; 6] = [
        song!("short", [(1, 100), (2, 100), (3, 100)]),
        song!("unused", []),
        song!("unused", []),
        song!("unused", []),
        song!("unused", []),
        song!("blip", [(5, 0)]),
    ];

    let events = [mode(0, Mode::Song), press(0, 0), press(5, 5)];
    let simulator = Simulator::new(12, SongBook::new(&SONGS), Timeline::new(&events));

    // Channel 5 has 7 ticks when channel 0 starts its song at tick 12. Playback
    // ends at tick 312 and channel 5 needs 5 more eligible ticks after that.
    assert_eq!(
        emitted(&simulator, 1_000),
        [(12, '1'), (112, '2'), (212, '3'), (317, '5')]
    );
}

#[test]
fn mode_is_read_at_each_fire() {
    const SONGS: [Song; 3] = [
        song!("zero", [(0, 10)]),
        song!("one", [(1, 10)]),
        song!("two", [(6, 10), (7, 10)]),
    ];

    let events = [
        press(0, 1),
        release(20, 1),
        mode(25, Mode::Song),
        press(30, 2),
        release(50, 2),
    ];
    let simulator = Simulator::new(12, SongBook::new(&SONGS), Timeline::new(&events));

    assert_eq!(emitted(&simulator, 200), [(12, '1'), (42, '6'), (52, '7')]);
}

#[test]
fn unknown_song_is_silently_ignored() {
    let events = [mode(0, Mode::Song), press(0, 7), release(30, 7), press(40, 1)];
    let simulator = Simulator::new(12, SongBook::new(&SONGS[..2]), Timeline::new(&events));

    let out = emitted(&simulator, 100);

    // Channel 7 has no song; channel 1 still plays normally afterwards
    assert_eq!(out.first(), Some(&(52, '0')));
    assert_eq!(out.len(), SONGS[1].len());
}

#[test]
fn identical_inputs_give_identical_output() {
    let events = [
        mode(0, Mode::Song),
        press(0, 4),
        press(3, 2),
        release(40, 4),
        mode(9_000, Mode::Direct),
        release(9_100, 2),
        press(9_200, 6),
    ];

    let first = Simulator::new(12, SongBook::builtin(), Timeline::new(&events));
    let second = Simulator::new(12, SongBook::builtin(), Timeline::new(&events));

    let a = emitted(&first, 20_000);
    let b = emitted(&second, 20_000);

    assert!(!a.is_empty());
    assert_eq!(a, b);
}
