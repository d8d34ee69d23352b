// Entry point: finds even-first triples and prints them

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use even_triples::{combinations, write_json, write_text, Instance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Count line followed by one `[a, b, c]` line per triple
    Text,
    /// Pretty-printed JSON solution
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "even_triples")]
#[command(about = "List ordered triples with an even first value that add up to a target", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON instance file with `numbers` and `target_sum`
    #[arg(long)]
    instance: Option<PathBuf>,

    /// Numbers to search, comma separated (overrides the instance)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    numbers: Option<Vec<i64>>,

    /// Target sum (overrides the instance)
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let instance = match &cli.instance {
        Some(path) => {
            log::info!("reading instance from {}", path.display());
            Instance::from_file(path)
                .with_context(|| format!("could not load {}", path.display()))?
        }
        None => {
            log::info!("using the built-in sample instance");
            Instance::sample()
        }
    }
    .with_overrides(cli.numbers, cli.target);

    let found = combinations(&instance.numbers, instance.target_sum);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => write_text(&mut out, &found)?,
        Format::Json => write_json(&mut out, instance.target_sum, &found)?,
    }
    out.flush()?;
    Ok(())
}
