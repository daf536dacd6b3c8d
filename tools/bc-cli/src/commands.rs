//! Subcommand implementations.
//!
//! Each command takes its parsed arguments, the services it needs, a
//! password source and a writer for the terminal view, so tests can drive
//! it without a process or a TTY.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bc_01_schedule_projector::{parse_origin_date, ScheduleProjector};
use bc_02_envelope_codec::{Envelope, EnvelopeCodec, SchedulePayload};
use clap::Args;
use tracing::info;

use crate::render::{render_payload, render_records, render_summary};

/// Arguments of `bc-cli calculate`.
#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Billing cycle start date, MM/DD/YYYY
    pub date: String,

    /// Project this many monthly cycles instead of the single-cycle view
    #[arg(short, long)]
    pub cycles: Option<u32>,

    /// Write the schedule to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seal the written schedule under a password
    #[arg(long, requires = "output")]
    pub encrypt: bool,
}

/// Arguments of `bc-cli decrypt`.
#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Envelope file written by `calculate --encrypt`
    pub input: PathBuf,

    /// Write the opened schedule here as pretty JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Compute a schedule, print it, and optionally write it (sealed or not).
///
/// `password` is only called when `--encrypt` is given.
pub fn run_calculate<P, W>(
    args: &CalculateArgs,
    projector: &ScheduleProjector,
    codec: &EnvelopeCodec,
    password: P,
    out: &mut W,
) -> Result<()>
where
    P: FnOnce() -> Result<String>,
    W: Write,
{
    let origin = parse_origin_date(&args.date)?;

    let payload = match args.cycles {
        None => {
            let summary = projector.summarize(origin)?;
            out.write_all(render_summary(&summary).as_bytes())?;
            SchedulePayload::from(projector.compute_cycle(origin)?)
        }
        Some(cycles) => {
            let records = projector.project(origin, cycles)?;
            out.write_all(render_records(&records).as_bytes())?;
            SchedulePayload::from(records)
        }
    };

    let Some(path) = &args.output else {
        if args.encrypt {
            bail!("--encrypt needs --output");
        }
        return Ok(());
    };

    let contents = if args.encrypt {
        let password = password()?;
        codec.seal_schedule(&payload, &password)?.to_json()?
    } else {
        payload.to_pretty_json()?
    };
    write_file(path, &contents)?;

    info!(
        path = %path.display(),
        entries = payload.len(),
        sealed = args.encrypt,
        "Schedule written"
    );
    Ok(())
}

/// Open an envelope file, print its schedule, optionally write the plaintext.
pub fn run_decrypt<P, W>(args: &DecryptArgs, codec: &EnvelopeCodec, password: P, out: &mut W) -> Result<()>
where
    P: FnOnce() -> Result<String>,
    W: Write,
{
    let record = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let envelope = Envelope::from_json(&record)?;

    let password = password()?;
    let payload = codec.open_schedule(&envelope, &password)?;
    out.write_all(render_payload(&payload).as_bytes())?;

    if let Some(path) = &args.output {
        write_file(path, &payload.to_pretty_json()?)?;
        info!(path = %path.display(), entries = payload.len(), "Opened schedule written");
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
