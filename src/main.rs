//! ElectraCalc - Electrical Calculator Suite
//!
//! An interactive calculator for everyday electronics math: Ohm's law,
//! LED series resistors, component combinations, battery runtime and
//! cable voltage drop.
//!
//! # Usage
//!
//! ```bash
//! electracalc                 # start on the LED resistor tab
//! electracalc --calculator ohm
//! ```

use std::io;

use clap::Parser;
use electracalc_core::{
    error::Result,
    repl,
    suite::{CalculatorKind, Suite},
};

/// Electrical calculator suite
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Calculator to open first (led, ohm, combinations, battery, drop)
    #[arg(short, long, default_value = "led", value_name = "CALCULATOR")]
    calculator: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let kind = CalculatorKind::from_name(&args.calculator)?;
    let mut suite = Suite::with_active(kind);

    repl::run(&mut suite, io::stdin().lock(), io::stdout())
}
