use core::cell::{Cell, RefCell};

use cortex_m::peripheral::NVIC;
use critical_section::Mutex;
use rp_pico::hal::{
    fugit::{ExtU32, ExtU64, MicrosDurationU32},
    pac,
    timer::{Alarm, Alarm0},
    Timer,
};
use xylophone_core::TICK_PERIOD_US;

// Set once by `start` and only used by the timer interrupt afterwards
static TIMER: Mutex<Cell<Option<Timer>>> = Mutex::new(Cell::new(None));
static ALARM0: Mutex<RefCell<Option<Alarm0>>> = Mutex::new(RefCell::new(None));

/// Arms alarm 0 so that `TIMER_IRQ_0` fires once per tick period.
///
/// The interrupt handler must call [`handle`].
pub fn start(mut timer: Timer) {
    let mut alarm0 = timer.alarm_0().unwrap();

    alarm0.schedule((TICK_PERIOD_US as u32).micros()).unwrap();
    alarm0.enable_interrupt();

    critical_section::with(|cs| {
        TIMER.borrow(cs).set(Some(timer));
        ALARM0.borrow(cs).replace(Some(alarm0));
    });

    unsafe {
        NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }
}

/// Runs `on_tick` and schedules the next tick, subtracting the time the
/// handler itself took.
pub fn handle(on_tick: impl FnOnce()) {
    critical_section::with(|cs| {
        let Some(timer) = TIMER.borrow(cs).get() else {
            return;
        };
        let mut alarm = ALARM0.borrow(cs).borrow_mut();
        let Some(alarm) = alarm.as_mut() else {
            return;
        };

        let start_time = timer.get_counter();

        on_tick();

        /* Schedule the next alarm */

        let elapsed_time = timer.get_counter() - start_time;

        let time_to_next = TICK_PERIOD_US
            .micros()
            .checked_sub(elapsed_time)
            .unwrap_or(0u64.micros());

        if time_to_next.is_zero() {
            defmt::error!(
                "TIMER_IRQ_0 overran allotted time (TICK_PERIOD_US) by {}µs! (total elapsed = {}µs)",
                elapsed_time.to_micros().saturating_sub(TICK_PERIOD_US),
                elapsed_time.to_micros(),
            );
        }

        alarm.clear_interrupt();

        let next: MicrosDurationU32 = time_to_next
            .try_into()
            .unwrap_or((TICK_PERIOD_US as u32).micros());
        if alarm.schedule(next).is_err() {
            defmt::error!("failed to schedule next tick");
        }

        alarm.enable_interrupt();
    });
}
