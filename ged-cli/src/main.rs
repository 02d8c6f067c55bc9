//! GED CLI - Command line tool for the electoral demographics dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ged-cli",
    version,
    about = "Electoral demographics data toolkit"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: ged_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    log::debug!("debug logging enabled");
    ged_cmd::run(cli.command).await
}
