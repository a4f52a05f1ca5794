use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect};
use crate::api::TicketApi;
use crate::error::{DeskError, Result};
use crate::types::TicketId;

/// Mark a ticket as resolved
pub async fn cmd_resolve(api_url: Option<&str>, id: &str, output_json: bool) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(DeskError::InvalidArgument(
            "ticket id cannot be empty".to_string(),
        ));
    }

    let api = connect(api_url)?;
    let id = TicketId::new(id);
    api.resolve_ticket(&id).await?;

    CommandOutput::new(json!({
        "id": id,
        "status": "Resolved",
    }))
    .with_text(format!("{} {}", "Resolved".green(), id.cyan()))
    .print(output_json)
}
