use embedded_hal::digital::InputPin;
use rp_pico::hal::gpio::{DynPinId, FunctionSioInput, Pin, PullUp};
use xylophone_core::{InputLines, Mode, CHANNEL_COUNT};

pub type ButtonPin = Pin<DynPinId, FunctionSioInput, PullUp>;

/// The button inputs and the mode switch.
///
/// Every line is pulled up and shorted to ground when closed, so a low level
/// means pressed (or direct mode, for the switch).
pub struct Buttons {
    buttons: [ButtonPin; CHANNEL_COUNT],
    mode: ButtonPin,
}

impl Buttons {
    pub fn new(buttons: [ButtonPin; CHANNEL_COUNT], mode: ButtonPin) -> Self {
        Self { buttons, mode }
    }
}

fn is_low(pin: &mut ButtonPin) -> bool {
    matches!(InputPin::is_low(pin), Ok(true))
}

impl InputLines for Buttons {
    fn is_pressed(&mut self, channel: usize) -> bool {
        self.buttons.get_mut(channel).is_some_and(is_low)
    }

    fn mode(&mut self) -> Mode {
        Mode::from_line_low(is_low(&mut self.mode))
    }
}
