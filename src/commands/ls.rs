use serde_json::json;

use super::{CommandOutput, connect};
use crate::api::TicketApi;
use crate::dashboard::{ViewFilter, filter_tickets};
use crate::display::{
    format_page_position, format_showing, format_ticket_detail, format_ticket_line,
};
use crate::error::{DeskError, Result};
use crate::types::{Category, PageQuery, SortDirection, TicketStatus};

/// Options for `ticketdesk ls`
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    /// Zero-based page index
    pub page: u32,
    /// Page size; falls back to the configured default
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub direction: Option<SortDirection>,
    pub category: Option<Category>,
    pub status: Option<TicketStatus>,
    /// Print whole messages instead of one line per ticket
    pub full: bool,
    pub json: bool,
}

impl LsOptions {
    fn query(&self, default_size: u32) -> Result<PageQuery> {
        let size = self.size.unwrap_or(default_size);
        if size == 0 {
            return Err(DeskError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }

        let mut query = PageQuery::with_size(size);
        query.page = self.page;
        if let Some(sort_by) = &self.sort_by {
            query.sort_by = sort_by.clone();
        }
        if let Some(direction) = self.direction {
            query.sort_direction = direction;
        }
        Ok(query)
    }
}

/// List one page of tickets, narrowed by the view filter
pub async fn cmd_ls(api_url: Option<&str>, options: LsOptions) -> Result<()> {
    let default_size = crate::config::Config::load()?.page_size();
    let query = options.query(default_size)?;
    let api = connect(api_url)?;
    ls_with_api(&api, &query, &options).await
}

async fn ls_with_api(api: &dyn TicketApi, query: &PageQuery, options: &LsOptions) -> Result<()> {
    let page = api.fetch_page(query).await?;
    let filter = ViewFilter::new(options.category, options.status);
    let visible = filter_tickets(&page.content, &filter);

    let json_output = json!({
        "page": query.page,
        "size": query.size,
        "total_pages": page.total_pages,
        "total_elements": page.total_elements,
        "tickets": visible,
    });

    let mut lines: Vec<String> = visible
        .iter()
        .map(|t| {
            if options.full {
                format!("{}\n", format_ticket_detail(t))
            } else {
                format_ticket_line(t)
            }
        })
        .collect();
    if visible.is_empty() {
        lines.push("No tickets found matching your criteria".to_string());
    }
    lines.push(String::new());
    lines.push(format!(
        "{} · {}",
        format_showing(visible.len(), page.total_elements),
        format_page_position(query.page, page.total_pages)
    ));

    CommandOutput::new(json_output)
        .with_text(lines.join("\n"))
        .print(options.json)
}
