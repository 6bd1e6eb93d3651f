use anyhow::Context;
use clap::Parser;
use hwinv::run_batch;
use hwinv_core::{config::Config, Assembler};
use hwinv_export::{remove_stale, ExportFormat, Removal};
use hwinv_sources::DirectorySource;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hwinv", about = "Consolidate HWiNFO HTML reports into one inventory table")]
struct Cli {
    /// Directory to scan for reports (default: `[scan].root`, usually `.`).
    root: Option<PathBuf>,

    /// Output file, or `-` for stdout (default: `[output].path`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: csv, tsv or json (default: `[output].format`).
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Config file to use instead of `./hwinv.toml`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leave an existing output file in place until it is overwritten.
    #[arg(long)]
    keep_existing: bool,

    /// Log per-report extraction details.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let root = cli.root.unwrap_or(config.scan.root);
    let output = cli.output.unwrap_or(config.output.path);
    let format = match cli.format {
        Some(format) => format,
        None => config
            .output
            .format
            .parse::<ExportFormat>()
            .context("reading [output].format")?,
    };

    let to_stdout = output.as_os_str() == "-";

    if !cli.keep_existing && !to_stdout {
        match remove_stale(&output).context("removing previous output")? {
            Removal::Removed => println!("→ Old file '{}' deleted.", output.display()),
            Removal::Absent => {}
        }
    }

    let source = Arc::new(DirectorySource::new(root, &config.scan.extensions));
    let assembler = Arc::new(Assembler::new(config.extract.known_models));

    let outcome = run_batch(source, assembler).await?;
    if !outcome.failures.is_empty() {
        eprintln!("Skipped {} unreadable report(s):", outcome.failures.len());
        for failure in &outcome.failures {
            eprintln!("  {}: {}", failure.path.display(), failure.reason);
        }
    }

    if to_stdout {
        hwinv_export::write_table(std::io::stdout().lock(), format, &outcome.records)
            .context("writing table to stdout")?;
        eprintln!("Total records: {}", outcome.records.len());
        return Ok(());
    }

    hwinv_export::write_file(&output, format, &outcome.records)
        .with_context(|| format!("writing {}", output.display()))?;

    println!("Success! Inventory written to {}", output.display());
    println!("Total records: {}", outcome.records.len());
    Ok(())
}
