use anyhow::Result;
use clap::Parser;

use crate::config::Config;

use super::commands;

/// Entry point for the `stackgenius` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "stackgenius",
    about = "AI-powered tech stack recommendations for your project idea",
    version,
    long_about = None
)]
pub struct Cli {
    /// Software type: web_app, hybrid_app, android_app, ios_app, desktop_app
    #[arg(short = 't', long = "software-type")]
    pub software_type: Option<String>,

    /// API key for this run (overrides the config file and GEMINI_API_KEY)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Override the Gemini model
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Dump raw request/response JSON to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Interactive first-time configuration
    #[arg(long = "setup")]
    pub setup: bool,

    /// Project description: words typed after `stackgenius`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub description: Vec<String>,
}

impl Cli {
    pub async fn run_setup(self) -> Result<()> {
        commands::run_setup(self).await
    }

    pub async fn run(self, config: Config) -> Result<()> {
        commands::run(self, config).await
    }
}
