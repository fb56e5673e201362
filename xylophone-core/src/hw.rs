use crate::symbol::{Mode, Symbol};

/// The digital inputs of the instrument
pub trait InputLines {
    /// Whether the button on `channel` is currently held down
    fn is_pressed(&mut self, channel: usize) -> bool;

    /// Reads the mode select line
    fn mode(&mut self) -> Mode;
}

/// Where emitted symbols go (the serial line on hardware)
pub trait SymbolSink {
    fn emit(&mut self, symbol: Symbol);
}

impl<F> SymbolSink for F
where
    F: FnMut(Symbol),
{
    fn emit(&mut self, symbol: Symbol) {
        self(symbol)
    }
}

/// One iteration of the busy-wait while a note sounds
pub trait Spin {
    fn spin(&mut self);
}

/// Spins in place and lets the tick interrupt do the work
#[derive(Debug, Clone, Copy, Default)]
pub struct BusyWait;

impl Spin for BusyWait {
    #[inline]
    fn spin(&mut self) {
        core::hint::spin_loop();
    }
}
