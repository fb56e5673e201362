/// Builds a [`Song`](crate::song::Song) from `(symbol, duration_ms)` pairs.
///
/// Symbols are range checked at compile time.
#[macro_export]
macro_rules! song {
    ($name:expr, [$(($symbol:expr, $duration:expr)),* $(,)?]) => {{
        const NOTES: &[$crate::song::Note] = &[$($crate::song::Note::new($symbol, $duration)),*];
        $crate::song::Song::new($name, NOTES)
    }};
}

/// Emits a `defmt::debug!` event when the `defmt` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    };
}
