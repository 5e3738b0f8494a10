use anyhow::Result;
use std::str::FromStr;

use crate::config::Config;
use crate::errors::RecommendError;
use crate::recommend::{self, SoftwareType};

use super::args::Cli;
use super::form;
use super::render;
use super::setup;
use super::util;

pub(crate) async fn run_setup(_cli: Cli) -> Result<()> {
    setup::run_setup().await
}

pub(crate) async fn run(cli: Cli, mut config: Config) -> Result<()> {
    if let Some(timeout) = cli.timeout {
        config.llm.timeout_secs = timeout;
    }
    if let Some(model) = cli.model.clone() {
        config.model.name = model;
    }
    if let Some(api_key) = cli.api_key.clone() {
        config.llm.api_key = api_key;
    }
    config.validate()?;

    let piped_input = util::read_piped_stdin()?;
    let description_args = cli.description.join(" ").trim().to_owned();

    let one_shot =
        !description_args.is_empty() || piped_input.is_some() || cli.software_type.is_some();
    if !one_shot {
        return form::run_form(&config, cli.verbose).await;
    }

    let software_type = match cli.software_type.as_deref() {
        Some(raw) => SoftwareType::from_str(raw)?,
        None => SoftwareType::WebApp,
    };

    let description = match description_args.is_empty() {
        true => piped_input
            .map(|input| form::normalize_description(&input))
            .unwrap_or_default(),
        false => description_args,
    };

    // Pipeline boundary: from here on every failure becomes one visible
    // line, never a crash or a nonzero exit.
    let Some(credential) = form::normalize_credential(&config.llm.api_key) else {
        render::render_error(&RecommendError::MissingCredential);
        return Ok(());
    };

    match recommend::submit(&config, &credential, software_type, &description, cli.verbose).await {
        Ok(recommendation) => render::render_recommendation(&recommendation),
        Err(err) => render::render_error(&err),
    }

    Ok(())
}
