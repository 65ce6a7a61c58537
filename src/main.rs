use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;
use ykit::{cli::Cli, commands::dispatch::run_command, common::OutputFormat};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // RUST_LOG で詳細度を切り替える (既定は warn)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let output_format = OutputFormat::from_str(&args.output_format);
    // エラーはmainの戻り値として1回だけ表示される
    let rendered = run_command(&args.command, output_format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
