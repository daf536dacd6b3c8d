//! BC-CLI: billing-cycle calculator and schedule envelope tool

use std::env;
use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use bc_01_schedule_projector::ScheduleProjector;
use bc_02_envelope_codec::EnvelopeCodec;
use bc_cli::{resolve_password, run_calculate, run_decrypt, CalculateArgs, DecryptArgs, PASSWORD_ENV};
use bc_telemetry::{init_logging, TelemetryConfig};

/// BC-CLI: billing-cycle milestone calculator
#[derive(Parser, Debug)]
#[command(name = "bc-cli")]
#[command(about = "Compute billing-cycle milestone dates and seal them under a password")]
struct Cli {
    /// Log at debug level regardless of BC_LOG_LEVEL
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute milestone dates from a cycle start date
    Calculate(CalculateArgs),
    /// Open a sealed schedule file
    Decrypt(DecryptArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    let _guard = init_logging(&telemetry)?;

    let codec = EnvelopeCodec::default();
    let password = || {
        let stdin = io::stdin();
        resolve_password(env::var(PASSWORD_ENV).ok(), &mut stdin.lock(), &mut io::stderr())
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Calculate(args) => {
            run_calculate(&args, &ScheduleProjector::standard(), &codec, password, &mut out)?
        }
        Command::Decrypt(args) => run_decrypt(&args, &codec, password, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
