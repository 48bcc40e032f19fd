//! prng-stats: sample a generator or report on its statistical quality

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use randlib_core::{Algorithm, PrngConfig, RandomSource, SeedSpec, StatsReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prng-stats", version, about = "Inspect seedable PRNG output")]
struct CliArgs {
    /// Generator algorithm (pseudo-des, xorshift64*)
    #[arg(long, short, global = true)]
    algorithm: Option<String>,

    /// Seed bytes as hex, e.g. 0x01020304
    #[arg(long, short, global = true, conflicts_with = "config")]
    seed: Option<String>,

    /// JSON config file with `algorithm` and `seed`
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print generated values, one per line
    Sample {
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        #[arg(long, short, value_enum, default_value_t = Format::U32)]
        format: Format,
    },
    /// Print a statistics report; exits with 1 if basic checks fail
    Report {
        #[arg(long, short = 'n', default_value_t = 1 << 20)]
        samples: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    U32,
    Hex,
    Float,
}

impl CliArgs {
    fn prng_config(&self) -> anyhow::Result<PrngConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                PrngConfig::from_json(&text)?
            }
            None => PrngConfig::default(),
        };
        if let Some(name) = &self.algorithm {
            config.algorithm = name.parse::<Algorithm>()?;
        }
        if let Some(hex) = &self.seed {
            config.seed = SeedSpec::Hex(hex.clone());
        }
        Ok(config)
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn sample(rng: &mut dyn RandomSource, count: usize, format: Format) {
    for _ in 0..count {
        match format {
            Format::U32 => println!("{}", rng.next_u32()),
            Format::Hex => println!("{:08x}", rng.next_u32()),
            Format::Float => println!("{:.9}", rng.next_f32()),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = CliArgs::parse();
    let config = args.prng_config()?;
    let mut rng = config.build()?;
    info!(generator = rng.name(), algorithm = %config.algorithm, "generator ready");

    match args.command {
        Command::Sample { count, format } => {
            sample(rng.as_mut(), count, format);
            Ok(ExitCode::SUCCESS)
        }
        Command::Report { samples, json } => {
            let report = StatsReport::collect(rng.as_mut(), samples)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            if report.passes_basic_checks() {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("failed checks: {}", report.failures().join(", "));
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
