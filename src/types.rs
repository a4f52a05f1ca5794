use std::fmt;
use std::str::FromStr;

use jiff::civil;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::DeskError;

pub const CONFIG_DIR: &str = ".ticketdesk";

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page sizes offered by the dashboard's page-size selector.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 20, 50];

pub const DEFAULT_SORT_FIELD: &str = "createdAt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    Open,
    Resolved,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 2] = [TicketStatus::Open, TicketStatus::Resolved];
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "Open"),
            TicketStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "resolved" => Ok(TicketStatus::Resolved),
            _ => Err(DeskError::InvalidArgument(format!(
                "invalid status '{s}', expected one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["Open", "Resolved"];

/// Classification label assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Accounts,
    Delivery,
    Finance,
    Product,
    Refund,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Accounts,
        Category::Delivery,
        Category::Finance,
        Category::Product,
        Category::Refund,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Accounts => "Accounts",
            Category::Delivery => "Delivery",
            Category::Finance => "Finance",
            Category::Product => "Product",
            Category::Refund => "Refund",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                DeskError::InvalidArgument(format!(
                    "invalid category '{s}', expected one of: {}",
                    VALID_CATEGORIES.join(", ")
                ))
            })
    }
}

pub const VALID_CATEGORIES: &[&str] = &[
    "Technology",
    "Accounts",
    "Delivery",
    "Finance",
    "Product",
    "Refund",
];

/// Opaque backend identifier. The backend may send it as a JSON number or a
/// string; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        TicketId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for TicketId {
    fn from(id: u64) -> Self {
        TicketId(id.to_string())
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        TicketId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(TicketId(n.to_string())),
            RawId::Text(s) if s.trim().is_empty() => {
                Err(serde::de::Error::custom("ticket id cannot be empty"))
            }
            RawId::Text(s) => Ok(TicketId(s)),
        }
    }
}

/// A support ticket as reported by the backend.
///
/// Deserialization goes through [`TicketRecord`] so that malformed payloads
/// (unknown labels, out-of-range confidence, unparseable timestamps) are
/// rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TicketRecord")]
pub struct Ticket {
    pub id: TicketId,
    pub ticket_id: String,
    pub sender_email: String,
    pub message: String,
    pub category: Category,
    pub confidence: f64,
    pub status: TicketStatus,
    #[serde(serialize_with = "serialize_display")]
    pub created_at: civil::DateTime,
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }
}

/// Wire shape of a ticket before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketRecord {
    id: TicketId,
    ticket_id: String,
    sender_email: String,
    message: String,
    category: String,
    confidence: f64,
    status: String,
    created_at: String,
}

impl TryFrom<TicketRecord> for Ticket {
    type Error = String;

    fn try_from(record: TicketRecord) -> Result<Self, Self::Error> {
        let category = record
            .category
            .parse::<Category>()
            .map_err(|e| format!("ticket {}: {e}", record.ticket_id))?;
        let status = record
            .status
            .parse::<TicketStatus>()
            .map_err(|e| format!("ticket {}: {e}", record.ticket_id))?;

        if !record.confidence.is_finite() || !(0.0..=1.0).contains(&record.confidence) {
            return Err(format!(
                "ticket {}: confidence {} is outside [0, 1]",
                record.ticket_id, record.confidence
            ));
        }

        let created_at = parse_created_at(&record.created_at).ok_or_else(|| {
            format!(
                "ticket {}: invalid createdAt '{}'",
                record.ticket_id, record.created_at
            )
        })?;

        Ok(Ticket {
            id: record.id,
            ticket_id: record.ticket_id,
            sender_email: record.sender_email,
            message: record.message,
            category,
            confidence: record.confidence,
            status,
            created_at,
        })
    }
}

/// Parse a creation timestamp.
///
/// Accepts RFC 3339 instants (normalized to UTC) as well as zone-less ISO
/// datetimes such as `2024-05-01T10:20:30.123`.
pub fn parse_created_at(s: &str) -> Option<civil::DateTime> {
    let s = s.trim();
    if let Ok(ts) = s.parse::<jiff::Timestamp>() {
        return Some(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime());
    }
    s.parse::<civil::DateTime>().ok()
}

fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: fmt::Display,
{
    serializer.collect_str(value)
}

/// One page of tickets as returned by the paginated listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPage {
    pub content: Vec<Ticket>,
    pub total_pages: u32,
    pub total_elements: u64,
}

/// Server-computed summary numbers, displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total: u64,
    pub resolved: u64,
    pub pending: u64,
    pub avg_duration: String,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            total: 0,
            resolved: 0,
            pending: 0,
            avg_duration: "0h".to_string(),
        }
    }
}

impl AggregateStats {
    /// Store a single statistic. Each statistic is fetched independently, so
    /// the others are left as they were.
    pub fn apply(&mut self, value: StatValue) {
        match value {
            StatValue::Total(n) => self.total = n,
            StatValue::Resolved(n) => self.resolved = n,
            StatValue::Pending(n) => self.pending = n,
            StatValue::AvgDuration(s) => self.avg_duration = s,
        }
    }
}

/// Which aggregate statistic a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Total,
    Resolved,
    Pending,
    AvgDuration,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Total,
        StatKind::Resolved,
        StatKind::Pending,
        StatKind::AvgDuration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Total => "Total Tickets",
            StatKind::Resolved => "Resolved Tickets",
            StatKind::Pending => "Pending Tickets",
            StatKind::AvgDuration => "Avg. Resolution Time",
        }
    }
}

/// A successfully fetched statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Total(u64),
    Resolved(u64),
    Pending(u64),
    AvgDuration(String),
}

impl StatValue {
    pub fn kind(&self) -> StatKind {
        match self {
            StatValue::Total(_) => StatKind::Total,
            StatValue::Resolved(_) => StatKind::Resolved,
            StatValue::Pending(_) => StatKind::Pending,
            StatValue::AvgDuration(_) => StatKind::AvgDuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DeskError::InvalidArgument(format!(
                "invalid sort direction '{s}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// Pagination and sort parameters for one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SortDirection::Desc,
        }
    }
}

impl PageQuery {
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}
