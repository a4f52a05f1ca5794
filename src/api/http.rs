//! HTTP implementation of [`TicketApi`] using reqwest.
//!
//! No timeouts or retries are configured beyond reqwest's defaults: each call
//! is exactly one attempt and failures are reported to the caller.

use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::config::ApiBaseUrl;
use crate::error::{DeskError, Result};
use crate::types::{PageQuery, StatKind, StatValue, TicketId, TicketPage};

use super::{PAGINATED_PATH, RESOLVE_PATH, TicketApi, stat_path};

/// Longest response body excerpt carried in an error message
const ERROR_BODY_LIMIT: usize = 200;

/// Ticket backend reached over HTTP
pub struct HttpTicketApi {
    client: Client,
    base: ApiBaseUrl,
}

impl HttpTicketApi {
    /// Create a client for the given base URL
    pub fn new(base: ApiBaseUrl) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ticketdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    /// Build an endpoint URL by appending (percent-encoded) path segments
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(self.base.as_str())
            .map_err(|e| DeskError::Config(format!("invalid API URL '{}': {e}", self.base)))?;
        url.path_segments_mut()
            .map_err(|_| DeskError::Config(format!("API URL '{}' cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET an endpoint and return its body as text
    async fn get_text(&self, segments: &[&str]) -> Result<String> {
        let url = self.url(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}

/// Turn a non-2xx response into an [`DeskError::Api`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DeskError::Api {
        status,
        message: error_message(status, &body),
    })
}

fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    let mut excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
    if body.chars().count() > ERROR_BODY_LIMIT {
        excerpt.push_str("...");
    }
    excerpt
}

/// Parse an integer count body such as `42`
pub fn parse_count(endpoint: &str, body: &str) -> Result<u64> {
    serde_json::from_str::<u64>(body.trim()).map_err(|e| {
        DeskError::invalid_response(endpoint, format!("expected a non-negative integer: {e}"))
    })
}

/// Parse the average-duration body. The backend may send a JSON string
/// (`"4h 12m"`), a bare number, or plain text.
pub fn parse_duration(endpoint: &str, body: &str) -> Result<String> {
    let body = body.trim();
    if body.is_empty() {
        return Err(DeskError::invalid_response(endpoint, "empty body"));
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Ok(other) => Err(DeskError::invalid_response(
            endpoint,
            format!("expected a formatted duration, got {other}"),
        )),
        Err(_) => Ok(body.to_string()),
    }
}

/// Parse a paginated listing body
pub fn parse_page(endpoint: &str, body: &str) -> Result<TicketPage> {
    serde_json::from_str::<TicketPage>(body)
        .map_err(|e| DeskError::invalid_response(endpoint, e.to_string()))
}

#[async_trait::async_trait]
impl TicketApi for HttpTicketApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<TicketPage> {
        let url = self.url(PAGINATED_PATH)?;
        tracing::debug!(%url, page = query.page, size = query.size, "GET page");

        let response = self
            .client
            .get(url)
            .query(&[
                ("page", query.page.to_string()),
                ("size", query.size.to_string()),
                ("sortBy", query.sort_by.clone()),
                ("sortDirection", query.sort_direction.to_string()),
            ])
            .send()
            .await?;
        let body = check_status(response).await?.text().await?;

        parse_page(&PAGINATED_PATH.join("/"), &body)
    }

    async fn fetch_stat(&self, kind: StatKind) -> Result<StatValue> {
        let segments = stat_path(kind);
        let endpoint = segments.join("/");
        let body = self.get_text(segments).await?;

        match kind {
            StatKind::Total => parse_count(&endpoint, &body).map(StatValue::Total),
            StatKind::Resolved => parse_count(&endpoint, &body).map(StatValue::Resolved),
            StatKind::Pending => parse_count(&endpoint, &body).map(StatValue::Pending),
            StatKind::AvgDuration => parse_duration(&endpoint, &body).map(StatValue::AvgDuration),
        }
    }

    async fn resolve_ticket(&self, id: &TicketId) -> Result<()> {
        let mut segments = RESOLVE_PATH.to_vec();
        segments.push(id.as_str());
        let url = self.url(&segments)?;
        tracing::info!(%url, "PUT resolve");

        let response = self.client.put(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
