//! Calculator harness
//!
//! Constructs a `Calculator` and invokes its single `calculate` entry point
//! from the command line.
//!
//! ```bash
//! calculator-cli eval 8 2 divide          # prints 4
//! calculator-cli eval 2 5 subtract        # prints "Underflow error" on stderr, exit 1
//! calculator-cli --json eval 2 3 add      # prints the call record as JSON
//! calculator-cli operations               # lists supported labels
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use calculator::Calculator;
use calculator_sdk::{Calculation, CalculatorClientV1, Operation, Outcome, SERVICE_NAME, U256};

use crate::config::AppConfig;

/// Checked 256-bit calculator
#[derive(Parser, Debug)]
#[command(name = "calculator-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Print the call record as JSON instead of the bare result
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate `A <OPERATION> B`
    Eval {
        /// First operand (decimal, 256-bit unsigned)
        #[arg(value_parser = parse_operand)]
        a: U256,

        /// Second operand (decimal, 256-bit unsigned)
        #[arg(value_parser = parse_operand)]
        b: U256,

        /// One of: add, subtract, multiply, divide
        operation: String,
    },
    /// List supported operation labels
    Operations,
}

fn parse_operand(s: &str) -> Result<U256, String> {
    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return Err(format!("not a decimal unsigned integer: '{s}'"));
    }
    U256::from_str_radix(s, 10).map_err(|e| format!("not a 256-bit unsigned integer: {e}"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_verbosity(cli.verbose);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(&config.logging)?;

    match cli.command {
        Some(Commands::Eval { a, b, operation }) => Ok(eval(a, b, &operation, cli.json)),
        Some(Commands::Operations) => operations(cli.json),
        None => {
            eprintln!("no command given; see --help");
            Ok(ExitCode::from(2))
        }
    }
}

fn operations(json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string(&Operation::ALL)?);
    } else {
        for op in Operation::ALL {
            println!("{op}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn eval(a: U256, b: U256, operation: &str, json: bool) -> ExitCode {
    let calculator = Calculator::new();
    tracing::info!(service = SERVICE_NAME, "calculator constructed");

    let result = calculator.calculate(a, b, operation);
    let record = Calculation::record(a, b, operation, &result);

    if json {
        match serde_json::to_string(&record) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("failed to encode result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match &result {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    if record.is_success() {
        ExitCode::SUCCESS
    } else {
        if let Outcome::Error { code, .. } = &record.outcome {
            tracing::info!(code = %code, "calculation failed");
        }
        ExitCode::FAILURE
    }
}
