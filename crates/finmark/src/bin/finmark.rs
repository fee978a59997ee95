use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use finmark::{run_config, FinmarkJobConfig};

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::info;

/// Batch tool for fin/fluke mark traces and spot fiducials.
#[derive(Parser, Debug)]
#[command(name = "finmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every trace and fiducial job in a JSON config and write a report.
    Run {
        /// Path to the job config.
        config: PathBuf,
        /// Report path; overrides `output_path` from the config.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Log level (off, error, warn, info, debug, trace).
        #[cfg(not(feature = "tracing"))]
        #[arg(long, default_value = "info")]
        log_level: LevelFilter,
        /// Emit JSON log lines.
        #[cfg(feature = "tracing")]
        #[arg(long)]
        json_log: bool,
        /// Exit with status 2 if any job failed.
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Run {
            config,
            output,
            #[cfg(not(feature = "tracing"))]
            log_level,
            #[cfg(feature = "tracing")]
            json_log,
            strict,
        } => {
            #[cfg(not(feature = "tracing"))]
            finmark::core::init_with_level(log_level)?;
            #[cfg(feature = "tracing")]
            finmark::core::init_tracing(json_log);

            let cfg = FinmarkJobConfig::load_json(&config)?;
            let report = run_config(&cfg, &config);
            let output = output.unwrap_or_else(|| cfg.output_path());
            report.write_json(&output)?;

            let failed = report.failed();
            info!(
                "wrote {} ({} trace jobs, {} fiducial jobs, {} failed)",
                output.display(),
                report.traces.len(),
                report.fiducials.len(),
                failed
            );
            #[cfg(not(feature = "tracing"))]
            if finmark::core::warning_count() > failed {
                info!("{} warnings logged", finmark::core::warning_count());
            }
            if strict && failed > 0 {
                return Ok(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
