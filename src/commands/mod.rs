mod categories;
mod config;
mod dashboard;
mod ls;
mod resolve;
mod stats;

pub use categories::cmd_categories;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use ls::{LsOptions, cmd_ls};
pub use resolve::cmd_resolve;
pub use stats::cmd_stats;

use serde_json::Value;

use crate::api::HttpTicketApi;
use crate::config::Config;
use crate::error::Result;

/// Output of a command: always has a JSON form, optionally a text form.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON when `as_json` is set, text otherwise.
    /// Falls back to JSON when there is no text form.
    pub fn print(self, as_json: bool) -> Result<()> {
        match (as_json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Build an HTTP client from configuration.
///
/// `api_url` is the `--api-url` flag, which takes precedence over the
/// environment and the config file.
pub fn connect(api_url: Option<&str>) -> Result<HttpTicketApi> {
    let config = Config::load()?;
    let base = config.resolve_api_url(api_url)?;
    tracing::debug!(%base, "using ticket backend");
    HttpTicketApi::new(base)
}
