#![no_std]
#![no_main]

use defmt_rtt as _;
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
use xylophone_core::{BusyWait, Dispatcher, SharedState, SongBook, CHANNEL_COUNT, DEBOUNCE_THRESHOLD};

use xylophone_firmware::{
    buttons::Buttons,
    serial::{SerialSink, UartPins},
    tick, BAUD_RATE,
};

/* State shared between the main loop and the tick interrupt */

static STATE: SharedState = SharedState::new(DEBOUNCE_THRESHOLD);

#[entry]
fn main() -> ! {
    defmt::info!("Xylophone v{}", env!("CARGO_PKG_VERSION"));

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

    /* Set up the serial output */

    let uart_pins: UartPins = (pins.gpio0.reconfigure(), pins.gpio1.reconfigure());
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();

    /* Set up the buttons (GPIO2..GPIO9) and the mode switch (GPIO10) */

    let buttons = Buttons::new(
        [
            pins.gpio2.into_pull_up_input().into_dyn_pin(),
            pins.gpio3.into_pull_up_input().into_dyn_pin(),
            pins.gpio4.into_pull_up_input().into_dyn_pin(),
            pins.gpio5.into_pull_up_input().into_dyn_pin(),
            pins.gpio6.into_pull_up_input().into_dyn_pin(),
            pins.gpio7.into_pull_up_input().into_dyn_pin(),
            pins.gpio8.into_pull_up_input().into_dyn_pin(),
            pins.gpio9.into_pull_up_input().into_dyn_pin(),
        ],
        pins.gpio10.into_pull_up_input().into_dyn_pin(),
    );

    /* Start the tick */

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    tick::start(timer);

    defmt::info!("Started timer interrupt, polling {} buttons", CHANNEL_COUNT);

    Dispatcher::new(
        &STATE,
        SongBook::builtin(),
        buttons,
        SerialSink::new(uart),
        BusyWait,
    )
    .run()
}

#[interrupt]
fn TIMER_IRQ_0() {
    tick::handle(|| STATE.tick());
}
