//! `vitals-monitor` -- bedside vitals check.
//!
//! Reads a JSON object of vital readings (inline argument or stdin),
//! classifies each one, sounds the console alarm for critical readings, and
//! exits non-zero if any vital is out of range.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                        |
//! |------------------------|----------|---------|------------------------------------|
//! | `ALARM_CYCLES`         | no       | `6`     | Flash cycles per critical alert    |
//! | `ALARM_HALF_PERIOD_MS` | no       | `1000`  | Milliseconds per flash phase       |
//! | `RUST_LOG`             | no       | `vitals_monitor=info,vitals_alarm=info` | Log filter |

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitals_alarm::{AlarmConfig, ConsoleAlarm};
use vitals_monitor::input::{self as cli, Args, OutputFormat};
use vitals_monitor::EXIT_INPUT_ERROR;

fn main() {
    dotenvy::dotenv().ok();

    // Usage errors exit with 2, `--help` / `--version` with 0.
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitals_monitor=info,vitals_alarm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let code = match try_main(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Evaluation aborted");
            eprintln!("error: {e:#}");
            EXIT_INPUT_ERROR
        }
    };
    std::process::exit(code);
}

fn try_main(args: Args) -> anyhow::Result<i32> {
    let config = AlarmConfig::from_env().context("Invalid alarm configuration")?;

    tracing::info!(
        cycles = config.cycles,
        half_period_ms = config.half_period_ms,
        "Starting vitals-monitor",
    );

    let readings = cli::read_readings(args.readings.as_deref(), io::stdin().lock())?;

    // Keep stdout clean for the JSON report.
    let format = args.format();
    let sink: Box<dyn Write> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut alarm = ConsoleAlarm::new(sink, config);

    vitals_monitor::run(&readings, format, &mut alarm, &mut io::stdout().lock())
}
