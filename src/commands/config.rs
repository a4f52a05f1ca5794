//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set and persist one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{API_URL_ENV, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let env_url = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());

    let json_output = json!({
        "api_url": config.api_url,
        "api_url_env": env_url,
        "page_size": config.page_size(),
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    match &config.api_url {
        Some(url) => text_output.push_str(&format!("{}: {url}\n", "api_url".cyan())),
        None => text_output.push_str(&format!(
            "{}: {}\n",
            "api_url".cyan(),
            "not configured".dimmed()
        )),
    }
    if let Some(url) = &env_url {
        text_output.push_str(&format!(
            "  {}\n",
            format!("overridden by {API_URL_ENV}={url}").yellow()
        ));
    }
    text_output.push_str(&format!("{}: {}\n", "page_size".cyan(), config.page_size()));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let text = value.clone().unwrap_or_else(|| "not set".to_string());
    CommandOutput::new(json!({ "key": key, "value": value }))
        .with_text(text)
        .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?.unwrap_or_default();
    CommandOutput::new(json!({ "key": key, "value": stored }))
        .with_text(format!("Set {} = {}", key.cyan(), stored))
        .print(output_json)
}
