#![no_std]

pub mod buttons;
pub mod serial;
pub mod tick;

/// Baud rate of the symbol output on UART0
pub const BAUD_RATE: u32 = 115_200;
