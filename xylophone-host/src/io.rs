use std::{
    io::{self, Read},
    time::{Duration, Instant},
};

use anyhow::Result;
use serialport::SerialPort;
use xylophone_core::Symbol;

#[macro_export]
macro_rules! pause {
    () => {
        $crate::io::pause_impl(None);
    };
    ($($arg:tt)*) => {
        $crate::io::pause_impl(Some(&format!($($arg)*)));
    };
}

pub fn pause_impl(message: Option<&str>) {
    use std::io::{stdin, stdout, Write};
    use termion::input::TermRead;
    use termion::raw::IntoRawMode;

    println!("{}", message.unwrap_or("Press any key to continue..."));

    // Not a terminal: nothing to wait for
    let Ok(mut stdout) = stdout().into_raw_mode() else {
        return;
    };
    let _ = stdout.flush();
    stdin().events().next();
}

/// Reads symbols sent by the instrument
pub struct Monitor {
    port: Box<dyn SerialPort>,
    last_symbol: Option<Instant>,
}

impl Monitor {
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        Self {
            port,
            last_symbol: None,
        }
    }

    /// Prints every received symbol until the port fails
    pub fn run(&mut self) -> Result<()> {
        let mut buf = [0u8; 64];

        loop {
            let count = match self.port.read(&mut buf) {
                Ok(count) => count,
                Err(err) if err.kind() == io::ErrorKind::TimedOut => continue,
                Err(err) => return Err(err.into()),
            };

            for &byte in &buf[..count] {
                let Some(symbol) = Symbol::from_ascii(byte) else {
                    eprintln!("ignoring unexpected byte {:#04x}", byte);
                    continue;
                };

                let now = Instant::now();
                let gap = self.last_symbol.map(|last| now - last);
                self.last_symbol = Some(now);

                println!("{}", describe(symbol, gap));
            }
        }
    }
}

pub fn describe(symbol: Symbol, gap: Option<Duration>) -> String {
    match gap {
        Some(gap) => format!("{}  (+{} ms)", symbol, gap.as_millis()),
        None => format!("{}", symbol),
    }
}
