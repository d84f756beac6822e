//! Command implementations for postsmith.
//!
//! [`run`] loads configuration, applies CLI overrides, and either lists
//! topics or performs one generation run.

mod generate;
mod list;

pub use generate::{Outcome, generate_post};

use crate::cli::Cli;
use crate::config::Config;
use crate::content::ContentGenerator;
use crate::error::Result;
use crate::model::ModelHandler;
use crate::topic::TopicSelector;
use tracing::debug;

/// Execute the run described by the parsed arguments.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if cli.list {
        list::cmd_list(&config);
        return Ok(());
    }

    let model = ModelHandler::connect(&cli.model, &config.endpoint)?;
    let content = ContentGenerator::from_settings(&config.posts, config.timezone_offset()?);
    let temperature = config.endpoint.temperature;
    let mut selector = TopicSelector::new(config.topics);

    let outcome = generate_post(&mut selector, &model, &content, temperature).await?;
    generate::report(&outcome);
    Ok(())
}

/// Load (or create) the config file and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config)?;

    if let Some(output_dir) = &cli.output_dir {
        config.posts.output_dir = output_dir.to_string_lossy().into_owned();
    }
    if let Some(base_url) = &cli.base_url {
        config.endpoint.base_url = base_url.clone();
    }
    config.validate()?;

    debug!(
        topics = config.topics.len(),
        output_dir = %config.posts.output_dir,
        base_url = %config.endpoint.base_url,
        "configuration loaded"
    );
    Ok(config)
}
