//! Support ticket dashboard command (`ticketdesk dashboard`)
//!
//! Launches the full-screen dashboard. Logging goes to a file because the
//! terminal belongs to the UI.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::api::HttpTicketApi;
use crate::config::Config;
use crate::dashboard::TicketFetchController;
use crate::error::{DeskError, Result};
use crate::logging::{self, LogTarget};
use crate::paths;
use crate::tui::Dashboard;

/// Launch the dashboard TUI
pub async fn cmd_dashboard(api_url: Option<&str>, page_size: Option<u32>) -> Result<()> {
    let config = Config::load()?;
    let base = config.resolve_api_url(api_url)?;
    let page_size = page_size.unwrap_or_else(|| config.page_size());
    if page_size == 0 {
        return Err(DeskError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }

    let _log_guard = match logging::init(LogTarget::File(paths::logs_dir())) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    let host = base.host();
    tracing::info!(%base, page_size, "starting dashboard");

    let api = HttpTicketApi::new(base)?;
    let controller = TicketFetchController::new(Arc::new(api), page_size);

    element!(Dashboard(controller: Some(controller), host: Some(host)))
        .fullscreen()
        .await
        .map_err(|e| DeskError::Other(format!("TUI error: {e}")))
}
