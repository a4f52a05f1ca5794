//! TicketFetchController tests against an in-memory backend

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use ticketdesk::api::TicketApi;
use ticketdesk::dashboard::{DashboardAction, TOAST_TTL, TicketFetchController, ToastLevel};
use ticketdesk::error::{DeskError, Result};
use ticketdesk::types::{
    Category, PageQuery, StatKind, StatValue, Ticket, TicketId, TicketPage, TicketStatus,
};

/// Backend holding a fixed list of tickets
#[derive(Default)]
struct MockBackend {
    tickets: Vec<Ticket>,
    fail_pages: bool,
    fail_resolve: bool,
    failing_stats: Vec<StatKind>,
    page_requests: Vec<PageQuery>,
    resolved: Vec<TicketId>,
}

#[derive(Clone, Default)]
struct MockApi {
    backend: Arc<Mutex<MockBackend>>,
}

impl MockApi {
    fn with_tickets(count: u64) -> Self {
        let api = MockApi::default();
        api.backend.lock().tickets = (1..=count)
            .map(|i| {
                let category = Category::ALL[(i as usize) % Category::ALL.len()];
                ticket(i, category, TicketStatus::Open)
            })
            .collect();
        api
    }

    fn requests(&self) -> Vec<PageQuery> {
        self.backend.lock().page_requests.clone()
    }
}

fn ticket(id: u64, category: Category, status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId::from(id),
        ticket_id: format!("TCK-{id}"),
        sender_email: format!("user{id}@example.com"),
        message: "The app crashes on login".to_string(),
        category,
        confidence: 0.8,
        status,
        created_at: jiff::civil::date(2024, 5, 1).at(10, 0, 0, 0),
    }
}

fn unavailable() -> DeskError {
    DeskError::Api {
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: "down".to_string(),
    }
}

#[async_trait]
impl TicketApi for MockApi {
    async fn fetch_page(&self, query: &PageQuery) -> Result<TicketPage> {
        let mut backend = self.backend.lock();
        backend.page_requests.push(query.clone());
        if backend.fail_pages {
            return Err(unavailable());
        }

        let size = query.size as usize;
        let total = backend.tickets.len();
        let start = query.page as usize * size;
        let content = backend.tickets.iter().skip(start).take(size).cloned().collect();
        Ok(TicketPage {
            content,
            total_pages: total.div_ceil(size) as u32,
            total_elements: total as u64,
        })
    }

    async fn fetch_stat(&self, kind: StatKind) -> Result<StatValue> {
        let backend = self.backend.lock();
        if backend.failing_stats.contains(&kind) {
            return Err(unavailable());
        }
        let resolved = backend
            .tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Resolved)
            .count() as u64;
        let total = backend.tickets.len() as u64;
        Ok(match kind {
            StatKind::Total => StatValue::Total(total),
            StatKind::Resolved => StatValue::Resolved(resolved),
            StatKind::Pending => StatValue::Pending(total - resolved),
            StatKind::AvgDuration => StatValue::AvgDuration("2h 5m".to_string()),
        })
    }

    async fn resolve_ticket(&self, id: &TicketId) -> Result<()> {
        let mut backend = self.backend.lock();
        if backend.fail_resolve {
            return Err(unavailable());
        }
        let ticket = backend
            .tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| DeskError::Api {
                status: StatusCode::NOT_FOUND,
                message: "Not Found".to_string(),
            })?;
        ticket.status = TicketStatus::Resolved;
        backend.resolved.push(id.clone());
        Ok(())
    }
}

fn controller(api: &MockApi, page_size: u32) -> TicketFetchController {
    TicketFetchController::new(Arc::new(api.clone()), page_size)
}

async fn dispatch(controller: &TicketFetchController, action: DashboardAction) {
    if let Some(handle) = controller.dispatch(action) {
        handle.await.unwrap();
    }
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_refresh_loads_page_and_stats() {
    let api = MockApi::with_tickets(25);
    let controller = controller(&api, 10);

    controller.refresh().await;

    let state = controller.snapshot();
    assert_eq!(state.tickets().len(), 10);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.total_elements(), 25);
    assert_eq!(state.stats.total, 25);
    assert_eq!(state.stats.pending, 25);
    assert_eq!(state.stats.avg_duration, "2h 5m");
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert!(!state.distribution.is_empty());
}

#[tokio::test]
async fn test_revision_moves_on_update() {
    let api = MockApi::with_tickets(3);
    let controller = controller(&api, 10);
    let mut changes = controller.subscribe();

    let before = controller.revision();
    controller.load_page().await;

    assert!(controller.revision() > before);
    assert!(changes.has_changed().unwrap());
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_tickets() {
    let api = MockApi::with_tickets(5);
    let controller = controller(&api, 10);
    controller.load_page().await;

    api.backend.lock().fail_pages = true;
    controller.load_page().await;

    let state = controller.snapshot();
    assert_eq!(state.tickets().len(), 5);
    assert_eq!(state.error(), Some("Failed to load tickets. Please try again."));
    let toast = state.toast.expect("error toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Failed to load tickets");
}

#[tokio::test]
async fn test_first_fetch_failure_has_no_tickets() {
    let api = MockApi::with_tickets(5);
    api.backend.lock().fail_pages = true;
    let controller = controller(&api, 10);

    controller.load_page().await;

    let state = controller.snapshot();
    assert!(state.tickets().is_empty());
    assert!(state.error().is_some());
}

#[tokio::test]
async fn test_retry_after_failure_clears_error() {
    let api = MockApi::with_tickets(5);
    api.backend.lock().fail_pages = true;
    let controller = controller(&api, 10);
    controller.load_page().await;

    api.backend.lock().fail_pages = false;
    dispatch(&controller, DashboardAction::Retry).await;

    let state = controller.snapshot();
    assert!(state.error().is_none());
    assert_eq!(state.tickets().len(), 5);
}

#[tokio::test]
async fn test_stat_failures_are_independent() {
    let api = MockApi::with_tickets(4);
    api.backend.lock().failing_stats = vec![StatKind::Resolved, StatKind::AvgDuration];
    let controller = controller(&api, 10);

    controller.load_aggregate_stats().await;

    let state = controller.snapshot();
    assert_eq!(state.stats.total, 4);
    assert_eq!(state.stats.pending, 4);
    assert_eq!(state.stats.resolved, 0);
    assert_eq!(state.stats.avg_duration, "0h");
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_page_size_change_resets_to_first_page() {
    let api = MockApi::with_tickets(60);
    let controller = controller(&api, 20);
    controller.load_page().await;
    dispatch(&controller, DashboardAction::NextPage).await;
    assert_eq!(controller.snapshot().query.page, 1);

    dispatch(&controller, DashboardAction::SetPageSize(50)).await;

    let last = api.requests().last().cloned().unwrap();
    assert_eq!(last.page, 0);
    assert_eq!(last.size, 50);
    let state = controller.snapshot();
    assert_eq!(state.tickets().len(), 50);
    assert_eq!(state.total_pages(), 2);
}

#[tokio::test]
async fn test_next_page_stops_at_last_page() {
    let api = MockApi::with_tickets(15);
    let controller = controller(&api, 10);
    controller.load_page().await;

    dispatch(&controller, DashboardAction::NextPage).await;
    assert_eq!(controller.snapshot().query.page, 1);
    assert_eq!(controller.snapshot().tickets().len(), 5);

    let requests_before = api.requests().len();
    assert!(controller.dispatch(DashboardAction::NextPage).is_none());
    assert_eq!(api.requests().len(), requests_before);
    assert_eq!(controller.snapshot().query.page, 1);
}

#[tokio::test]
async fn test_failed_next_page_stays_on_displayed_page() {
    let api = MockApi::with_tickets(25);
    let controller = controller(&api, 10);
    controller.load_page().await;

    api.backend.lock().fail_pages = true;
    dispatch(&controller, DashboardAction::NextPage).await;

    assert_eq!(api.requests().last().unwrap().page, 1);
    let state = controller.snapshot();
    assert_eq!(state.query.page, 0);
    assert_eq!(state.tickets()[0].id, TicketId::from(1));
    assert!(state.error().is_some());
}

#[tokio::test]
async fn test_filters_do_not_refetch() {
    let api = MockApi::with_tickets(12);
    let controller = controller(&api, 20);
    controller.load_page().await;
    let requests_before = api.requests().len();

    assert!(controller.dispatch(DashboardAction::CycleCategoryFilter).is_none());
    assert!(controller.dispatch(DashboardAction::CycleStatusFilter).is_none());

    assert_eq!(api.requests().len(), requests_before);
    let state = controller.snapshot();
    assert!(state.visible_tickets().iter().all(|t| {
        t.category == Category::Technology && t.status == TicketStatus::Open
    }));
}

// ============================================================================
// Resolve
// ============================================================================

#[tokio::test]
async fn test_resolve_then_refetch_shows_resolved() {
    let api = MockApi::with_tickets(3);
    let controller = controller(&api, 10);
    controller.refresh().await;

    let id = TicketId::from(2);
    assert!(controller.resolve_ticket(&id).await);

    let state = controller.snapshot();
    let resolved = state.tickets().iter().find(|t| t.id == id).unwrap();
    assert_eq!(resolved.status, TicketStatus::Resolved);
    assert_eq!(state.stats.resolved, 1);
    let toast = state.toast.expect("success toast");
    assert_eq!(toast.level, ToastLevel::Success);
    assert_eq!(toast.message, "Ticket closed successfully!");
}

#[tokio::test]
async fn test_resolve_failure_leaves_ticket_open() {
    let api = MockApi::with_tickets(3);
    api.backend.lock().fail_resolve = true;
    let controller = controller(&api, 10);
    controller.load_page().await;
    let requests_before = api.requests().len();

    assert!(!controller.resolve_ticket(&TicketId::from(1)).await);

    let state = controller.snapshot();
    assert!(state.tickets().iter().all(|t| t.is_open()));
    assert_eq!(api.requests().len(), requests_before);
    assert_eq!(state.toast.unwrap().message, "Failed to close ticket");
}

#[tokio::test]
async fn test_resolve_from_detail_view() {
    let api = MockApi::with_tickets(3);
    let controller = controller(&api, 10);
    controller.load_page().await;

    dispatch(&controller, DashboardAction::MoveDown).await;
    dispatch(&controller, DashboardAction::OpenDetail).await;
    assert!(controller.snapshot().detail.is_some());

    dispatch(&controller, DashboardAction::ResolveSelected).await;

    assert_eq!(api.backend.lock().resolved, vec![TicketId::from(2)]);
    let state = controller.snapshot();
    assert!(state.detail.is_none());
    assert_eq!(state.tickets()[1].status, TicketStatus::Resolved);
}

#[tokio::test]
async fn test_resolving_resolved_ticket_sends_nothing() {
    let api = MockApi::default();
    api.backend.lock().tickets = vec![ticket(7, Category::Refund, TicketStatus::Resolved)];
    let controller = controller(&api, 10);
    controller.load_page().await;

    assert!(controller.dispatch(DashboardAction::ResolveSelected).is_none());

    assert!(api.backend.lock().resolved.is_empty());
    assert_eq!(
        controller.snapshot().toast.unwrap().message,
        "Ticket is already resolved"
    );
}

// ============================================================================
// Toasts
// ============================================================================

#[tokio::test]
async fn test_toast_expires_after_ttl() {
    let api = MockApi::with_tickets(1);
    api.backend.lock().fail_pages = true;
    let controller = controller(&api, 10);
    controller.load_page().await;
    assert!(controller.snapshot().toast.is_some());

    assert!(!controller.expire_toast(Instant::now()));
    let later = Instant::now() + TOAST_TTL + Duration::from_millis(10);
    assert!(controller.expire_toast(later));
    assert!(controller.snapshot().toast.is_none());
}
