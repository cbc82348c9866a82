use clap::Parser;
use provas_core::alert::{AlertBus, AlertKind};

mod cli;
mod commands;
mod opener;
mod output;

#[tokio::main]
async fn main() {
    let result = run().await;

    let alert = AlertBus::global().close();
    if let Some(alert) = &alert {
        eprintln!("[{}] {}", alert_tag(alert.kind), alert.text);
    }

    let failed_alert = alert.is_some_and(|alert| alert.kind == AlertKind::Error);
    if let Err(error) = result {
        eprintln!("provas error: {error:#}");
        std::process::exit(1);
    }
    if failed_alert {
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    commands::dispatch(cli.command, &flags).await
}

const fn alert_tag(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "ok",
        AlertKind::Error => "error",
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROVAS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
