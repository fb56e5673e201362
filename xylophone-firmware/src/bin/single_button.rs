#![no_std]
#![no_main]

use defmt_rtt as _;
use embedded_hal::digital::InputPin;
use panic_probe as _;
use rp_pico::{
    entry,
    hal::{
        self,
        clocks::{init_clocks_and_plls, Clock},
        fugit::RateExtU32,
        pac::{self, interrupt},
        uart::{DataBits, StopBits, UartConfig, UartPeripheral},
        watchdog::Watchdog,
        Sio,
    },
};
use xylophone_core::{ChannelBank, Symbol, SymbolSink, DEBOUNCE_THRESHOLD};

use xylophone_firmware::{
    serial::{SerialSink, UartPins},
    tick, BAUD_RATE,
};

/// The only button, on GPIO2. Nothing else uses the tick, so debounce is
/// never suspended.
static BUTTON: ChannelBank<1> = ChannelBank::new(DEBOUNCE_THRESHOLD);

const SYMBOL: Symbol = match Symbol::new(1) {
    Some(symbol) => symbol,
    None => panic!(),
};

#[entry]
fn main() -> ! {
    defmt::info!("Xylophone (single button) v{}", env!("CARGO_PKG_VERSION"));

    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let sio = Sio::new(pac.SIO);

    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let uart_pins: UartPins = (pins.gpio0.reconfigure(), pins.gpio1.reconfigure());
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();
    let mut serial = SerialSink::new(uart);

    let mut button = pins.gpio2.into_pull_up_input();

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    tick::start(timer);

    loop {
        BUTTON.sample(0, matches!(InputPin::is_low(&mut button), Ok(true)));

        if BUTTON.check_fire(0) {
            serial.emit(SYMBOL);
        }
    }
}

#[interrupt]
fn TIMER_IRQ_0() {
    tick::handle(|| BUTTON.advance_all());
}
