use crate::symbol::Symbol;

/// A single note: the symbol sent to the serial line and how long it sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub symbol: Symbol,
    pub duration_ms: u16,
}

impl Note {
    pub const fn new(symbol: u8, duration_ms: u16) -> Self {
        let Some(symbol) = Symbol::new(symbol) else {
            panic!("note symbol out of range");
        };

        Self {
            symbol,
            duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Song {
    pub name: &'static str,
    pub notes: &'static [Note],
}

impl Song {
    pub const fn new(name: &'static str, notes: &'static [Note]) -> Self {
        Self { name, notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn total_duration_ms(&self) -> u32 {
        self.notes.iter().map(|note| note.duration_ms as u32).sum()
    }
}

/// Songs indexed by the button that plays them
#[derive(Debug, Clone, Copy)]
pub struct SongBook<'a> {
    songs: &'a [Song],
}

impl<'a> SongBook<'a> {
    pub const fn new(songs: &'a [Song]) -> Self {
        Self { songs }
    }

    pub fn get(&self, index: usize) -> Option<&'a Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Song> {
        self.songs.iter()
    }
}

impl SongBook<'static> {
    pub fn builtin() -> Self {
        Self::new(&SONGS)
    }
}

pub static SONGS: [Song; 8] = [
    song!(
        "Jingle Bells",
        [
            (2, 500), (2, 500), (2, 1000), (2, 500), (2, 500),
            (2, 1000), (4, 1000), (1, 500), (2, 500), (3, 1000),
            (2, 500), (2, 500), (2, 1000), (2, 500), (2, 500),
            (2, 1000), (4, 1000), (1, 500), (2, 500), (4, 1500),
        ]
    ),
    song!(
        "We Wish You a Merry Christmas",
        [
            (0, 500), (3, 500), (3, 500), (4, 500), (3, 500),
            (2, 500), (1, 500), (1, 1000), (1, 500), (4, 500),
            (4, 500), (5, 500), (4, 500), (3, 500), (2, 500),
            (0, 1000), (3, 500), (2, 500), (3, 500), (1, 1000),
        ]
    ),
    song!(
        "Twinkle Twinkle Little Star",
        [
            (4, 500), (4, 500), (5, 500), (5, 1000), (4, 500),
            (3, 500), (3, 500), (2, 500), (2, 500), (1, 500),
            (1, 1000), (0, 500), (4, 500), (4, 500), (5, 1000),
            (5, 500), (4, 500), (3, 500), (2, 500), (1, 1000),
        ]
    ),
    song!(
        "Happy Birthday",
        [
            (4, 500), (4, 500), (5, 1000), (4, 500), (6, 500),
            (4, 1000), (4, 500), (5, 500), (4, 1000), (1, 500),
            (4, 500), (4, 1000), (5, 500), (4, 500), (1, 1000),
            (0, 500), (4, 500), (2, 500), (5, 1000), (3, 1000),
        ]
    ),
    song!(
        "Ode to Joy",
        [
            (2, 500), (2, 500), (3, 500), (4, 1000), (4, 500),
            (3, 500), (2, 500), (1, 500), (0, 1000), (1, 500),
            (2, 500), (2, 500), (1, 500), (1, 500), (0, 1000),
            (2, 500), (2, 500), (3, 500), (4, 1000), (3, 500),
        ]
    ),
    song!(
        "Silent Night",
        [
            (1, 500), (2, 500), (3, 1000), (1, 500), (2, 500),
            (3, 1000), (4, 500), (3, 500), (2, 500), (1, 1000),
            (1, 500), (3, 500), (3, 500), (4, 1000), (3, 500),
            (2, 500), (1, 500), (0, 1000), (3, 500), (3, 1000),
        ]
    ),
    song!(
        "Jingle Bell Rock",
        [
            (2, 500), (2, 500), (4, 500), (4, 500), (5, 500),
            (5, 500), (4, 1000), (4, 500), (5, 500), (3, 1000),
            (2, 500), (4, 500), (3, 500), (5, 1000), (4, 500),
            (3, 500), (2, 500), (4, 1000), (2, 500), (1, 1000),
        ]
    ),
    song!(
        "Let It Snow",
        [
            (4, 500), (4, 500), (5, 500), (5, 500), (6, 500),
            (6, 500), (5, 1000), (4, 500), (4, 500), (5, 500),
            (5, 500), (6, 500), (6, 500), (5, 500), (4, 1000),
            (5, 500), (5, 500), (6, 500), (6, 500), (4, 1000),
        ]
    ),
];
