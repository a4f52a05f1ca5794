//! Ticket backend access.
//!
//! The backend owns ticket storage and classification; this module only
//! describes the operations the dashboard needs from it and provides the HTTP
//! implementation.

pub mod http;

use futures::future::join_all;

use crate::error::Result;
use crate::types::{PageQuery, StatKind, StatValue, TicketId, TicketPage};

pub use http::HttpTicketApi;

/// Path of the paginated listing endpoint
pub const PAGINATED_PATH: &[&str] = &["tickets", "paginated"];

/// Path of the resolve endpoint, without the trailing ticket id
pub const RESOLVE_PATH: &[&str] = &["ticket"];

/// Path segments of the endpoint serving one aggregate statistic
pub fn stat_path(kind: StatKind) -> &'static [&'static str] {
    match kind {
        StatKind::Total => &["tickets", "count"],
        StatKind::Resolved => &["tickets", "count", "resolved"],
        StatKind::Pending => &["tickets", "count", "pending"],
        StatKind::AvgDuration => &["avgduration"],
    }
}

/// Operations the dashboard performs against the ticket backend
#[async_trait::async_trait]
pub trait TicketApi: Send + Sync {
    /// Fetch one page of tickets
    async fn fetch_page(&self, query: &PageQuery) -> Result<TicketPage>;

    /// Fetch a single aggregate statistic
    async fn fetch_stat(&self, kind: StatKind) -> Result<StatValue>;

    /// Request the Open -> Resolved transition for a ticket
    async fn resolve_ticket(&self, id: &TicketId) -> Result<()>;
}

/// Fetch all four statistics concurrently.
///
/// Each request is independent: one failing does not prevent the others from
/// being reported.
pub async fn fetch_all_stats(api: &dyn TicketApi) -> Vec<(StatKind, Result<StatValue>)> {
    let requests = StatKind::ALL
        .into_iter()
        .map(|kind| async move { (kind, api.fetch_stat(kind).await) });
    join_all(requests).await
}
