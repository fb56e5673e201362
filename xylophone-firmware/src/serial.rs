use rp_pico::hal::{
    gpio::{
        bank0::{Gpio0, Gpio1},
        FunctionUart, Pin, PullDown,
    },
    pac::UART0,
    uart::{Enabled, UartPeripheral},
};
use xylophone_core::{Symbol, SymbolSink};

pub type UartPins = (
    Pin<Gpio0, FunctionUart, PullDown>,
    Pin<Gpio1, FunctionUart, PullDown>,
);
pub type Uart = UartPeripheral<Enabled, UART0, UartPins>;

/// Sends each symbol as a single ASCII digit
pub struct SerialSink {
    uart: Uart,
}

impl SerialSink {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }
}

impl SymbolSink for SerialSink {
    fn emit(&mut self, symbol: Symbol) {
        #[cfg(feature = "io_debug")]
        defmt::debug!("tx {}", symbol);

        self.uart.write_full_blocking(&[symbol.to_ascii()]);
    }
}
