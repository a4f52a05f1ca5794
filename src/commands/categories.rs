use serde_json::json;

use super::{CommandOutput, connect};
use crate::api::TicketApi;
use crate::config::Config;
use crate::dashboard::compute_category_distribution;
use crate::display::{distribution_table, format_page_position};
use crate::error::Result;
use crate::types::PageQuery;

/// Show how the tickets of one page split across categories.
///
/// Counts cover only the requested page, not the whole backlog.
pub async fn cmd_categories(
    api_url: Option<&str>,
    page: u32,
    size: Option<u32>,
    output_json: bool,
) -> Result<()> {
    let size = size.unwrap_or(Config::load()?.page_size());
    let mut query = PageQuery::with_size(size.max(1));
    query.page = page;

    let api = connect(api_url)?;
    let result = api.fetch_page(&query).await?;
    let distribution = compute_category_distribution(&result.content);

    let text = if distribution.is_empty() {
        format!(
            "No tickets on this page ({})",
            format_page_position(page, result.total_pages)
        )
    } else {
        format!(
            "Category distribution (this page, {} tickets, {})\n{}",
            result.content.len(),
            format_page_position(page, result.total_pages),
            distribution_table(&distribution)
        )
    };

    CommandOutput::new(json!({
        "scope": "page",
        "page": page,
        "size": query.size,
        "categories": distribution,
    }))
    .with_text(text)
    .print(output_json)
}
