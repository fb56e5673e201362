use crate::{
    countdown::DelayCountdown,
    hw::{Spin, SymbolSink},
    song::SongBook,
};

/// Plays songs note by note, timing each note with the shared countdown
pub struct NoteSequencer<'a> {
    songs: SongBook<'a>,
    countdown: &'a DelayCountdown,
}

impl<'a> NoteSequencer<'a> {
    pub fn new(songs: SongBook<'a>, countdown: &'a DelayCountdown) -> Self {
        Self { songs, countdown }
    }

    /// Plays song `song_id` to completion, blocking the caller for its whole
    /// duration. Unknown songs are ignored and false is returned.
    pub fn play<S, W>(&self, song_id: usize, sink: &mut S, spin: &mut W) -> bool
    where
        S: SymbolSink + ?Sized,
        W: Spin + ?Sized,
    {
        let Some(song) = self.songs.get(song_id) else {
            trace!("no song at index {}", song_id);
            return false;
        };

        trace!("playing song {} ({} notes)", song_id, song.notes.len());

        for note in song.notes {
            sink.emit(note.symbol);
            self.countdown.start(note.duration_ms);

            while !self.countdown.is_zero() {
                spin.spin();
            }
        }

        true
    }
}
