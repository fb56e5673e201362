use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};
use xylophone_core::{
    sim::{Simulator, Timeline},
    SongBook,
};

use crate::io::Monitor;

mod config;
#[macro_use]
mod io;

/// Host tools for the xylophone instrument
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct XylophoneArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the symbols the instrument sends over its serial line
    Monitor {
        /// Serial port configuration
        #[arg(short, long, default_value = "/dev/ttyUSB0")]
        serial_port: String,

        /// Serial port baud rate
        #[arg(short, long, default_value_t = 115_200)]
        baud_rate: u32,
    },

    /// Run a scenario file against a model of the instrument
    Simulate {
        /// Path to the scenario file
        path: PathBuf,
    },

    /// List the built-in songs, by the button that plays them
    Songs,
}

fn main() -> Result<()> {
    let args = XylophoneArgs::parse();

    match args.command {
        Command::Monitor {
            serial_port,
            baud_rate,
        } => monitor(serial_port, baud_rate),
        Command::Simulate { path } => simulate(path),
        Command::Songs => {
            songs();
            Ok(())
        }
    }
}

fn monitor(port: String, baud_rate: u32) -> Result<()> {
    /* List Available Serial Ports */

    println!();
    for port in serialport::available_ports()? {
        println!("{:?}", port);
    }
    println!();

    pause!("Press any key to start listening...");

    /* Open a serial connection with the supplied settings */

    println!();
    println!("Serial Connection");
    println!("================");
    println!("Port: {}", port);
    println!("Baud Rate: {}", baud_rate);
    println!();

    let serial_port = serialport::new(port, baud_rate)
        .timeout(Duration::from_millis(500))
        .open()?;

    Monitor::new(serial_port).run()
}

fn simulate(path: PathBuf) -> Result<()> {
    let config = config::parse_scenario_config(&path)?;
    let events = config.timeline()?;

    println!();
    println!("Scenario");
    println!("========");
    println!("Threshold: {} ticks", config.threshold);
    println!("Events: {}", events.len());
    println!();

    let simulator = Simulator::new(config.threshold, SongBook::builtin(), Timeline::new(&events));

    let mut count = 0;
    simulator.run(config.ticks, |tick, symbol| {
        println!("{:>8}  {}", tick, symbol);
        count += 1;
    });

    println!();
    println!("{} symbols in {} ticks", count, simulator.now());

    Ok(())
}

fn songs() {
    for (button, song) in SongBook::builtin().iter().enumerate() {
        println!(
            "{}  {:<32} {:>2} notes  {:>6} ms",
            button,
            song.name,
            song.len(),
            song.total_duration_ms()
        );
    }
}
