mod cli;
mod client;
mod config;
mod errors;
mod recommend;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    if cli.setup {
        return cli.run_setup().await;
    }

    let config = config::Config::load()?;
    cli.run(config).await
}
