//! Dashboard state and reducer
//!
//! `DashboardState` is the single model the terminal UI renders from.
//! User input is turned into a [`DashboardAction`], applied with [`reduce`],
//! and any network work the action implies is returned as an [`Effect`] for
//! the controller to run.

use std::time::{Duration, Instant};

use crate::types::{
    AggregateStats, PAGE_SIZE_OPTIONS, PageQuery, StatValue, Ticket, TicketId, TicketPage,
};

use super::distribution::{CategoryCount, compute_category_distribution};
use super::fetch_state::FetchState;
use super::filter::{ViewFilter, filter_tickets};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(3);

pub const LOAD_FAILED_TOAST: &str = "Failed to load tickets";
pub const LOAD_FAILED_DETAIL: &str = "Failed to load tickets. Please try again.";
pub const RESOLVE_SUCCESS_TOAST: &str = "Ticket closed successfully!";
pub const RESOLVE_FAILED_TOAST: &str = "Failed to close ticket";
pub const ALREADY_RESOLVED_TOAST: &str = "Ticket is already resolved";

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
    Success,
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_TTL
    }
}

impl PartialEq for Toast {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.level == other.level
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Page, size and sort of the current listing request
    pub query: PageQuery,
    /// Most recent listing response
    pub page: FetchState<TicketPage>,
    /// Query that produced the tickets currently on screen
    pub loaded_query: Option<PageQuery>,
    pub stats: AggregateStats,
    /// Per-category counts of the loaded page
    pub distribution: Vec<CategoryCount>,
    pub filter: ViewFilter,
    /// Index into the filtered ticket list
    pub selected_index: usize,
    /// Ticket shown in the detail modal; `None` when the modal is hidden
    pub detail: Option<Ticket>,
    pub toast: Option<Toast>,
    pub should_exit: bool,
}

/// User intents on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    NextPage,
    PrevPage,
    CyclePageSize,
    SetPageSize(u32),
    CycleCategoryFilter,
    CycleStatusFilter,
    ResetFilters,
    MoveUp,
    MoveDown,
    OpenDetail,
    CloseDetail,
    ResolveSelected,
    Retry,
    Refresh,
    DismissToast,
    Quit,
}

/// Network work requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch the page described by the current query
    LoadPage,
    /// Resolve a ticket, then reload page and statistics
    Resolve(TicketId),
    /// Reload page and statistics
    ReloadAll,
}

impl DashboardState {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: PageQuery::with_size(page_size),
            ..Self::default()
        }
    }

    /// Tickets of the loaded page, in server order
    pub fn tickets(&self) -> &[Ticket] {
        self.page
            .data()
            .map(|p| p.content.as_slice())
            .unwrap_or_default()
    }

    /// Tickets that pass the view filter
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        filter_tickets(self.tickets(), &self.filter)
    }

    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.visible_tickets().get(self.selected_index).copied()
    }

    pub fn total_pages(&self) -> u32 {
        self.page.data().map_or(0, |p| p.total_pages)
    }

    pub fn total_elements(&self) -> u64 {
        self.page.data().map_or(0, |p| p.total_elements)
    }

    pub fn can_go_prev(&self) -> bool {
        self.query.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.query.page + 1 < self.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.page.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.page.error()
    }

    /// Mark the listing as loading and return the query to send
    pub fn begin_page_load(&mut self) -> PageQuery {
        self.page.start_loading();
        self.query.clone()
    }

    /// Store the outcome of a listing request
    pub fn apply_page_result(&mut self, result: Result<TicketPage, String>) {
        match result {
            Ok(page) => {
                self.loaded_query = Some(self.query.clone());
                self.distribution = compute_category_distribution(&page.content);
                self.page.succeed(page);
                self.clamp_selection();
            }
            Err(_) => {
                // Pagination goes back to the page that is still displayed
                if let Some((page, size)) = self.loaded_query.as_ref().map(|q| (q.page, q.size)) {
                    self.query.page = page;
                    self.query.size = size;
                }
                self.page.fail(LOAD_FAILED_DETAIL);
                self.toast = Some(Toast::error(LOAD_FAILED_TOAST));
            }
        }
    }

    /// Store one fetched statistic; failures leave the old value in place
    pub fn apply_stat(&mut self, value: StatValue) {
        self.stats.apply(value);
    }

    pub fn apply_resolve_result(&mut self, succeeded: bool) {
        self.toast = Some(if succeeded {
            Toast::success(RESOLVE_SUCCESS_TOAST)
        } else {
            Toast::error(RESOLVE_FAILED_TOAST)
        });
    }

    /// Drop the toast once its time is up. Returns true if it was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
            return true;
        }
        false
    }

    fn set_page_size(&mut self, size: u32) -> Effect {
        if size == 0 {
            return Effect::None;
        }
        self.query.size = size;
        self.query.page = 0;
        self.selected_index = 0;
        Effect::LoadPage
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tickets().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}

/// Next entry of the page-size selector after `current`
pub fn next_page_size(current: u32) -> u32 {
    PAGE_SIZE_OPTIONS
        .iter()
        .copied()
        .find(|size| *size > current)
        .or_else(|| PAGE_SIZE_OPTIONS.first().copied())
        .unwrap_or(current)
}

/// Apply an action to the dashboard state
pub fn reduce(state: &mut DashboardState, action: DashboardAction) -> Effect {
    match action {
        DashboardAction::NextPage => {
            if !state.can_go_next() {
                return Effect::None;
            }
            state.query.page += 1;
            state.selected_index = 0;
            Effect::LoadPage
        }
        DashboardAction::PrevPage => {
            if !state.can_go_prev() {
                return Effect::None;
            }
            state.query.page -= 1;
            state.selected_index = 0;
            Effect::LoadPage
        }
        DashboardAction::CyclePageSize => {
            let size = next_page_size(state.query.size);
            state.set_page_size(size)
        }
        DashboardAction::SetPageSize(size) => state.set_page_size(size),
        DashboardAction::CycleCategoryFilter => {
            state.filter.cycle_category();
            state.selected_index = 0;
            Effect::None
        }
        DashboardAction::CycleStatusFilter => {
            state.filter.cycle_status();
            state.selected_index = 0;
            Effect::None
        }
        DashboardAction::ResetFilters => {
            state.filter.reset();
            state.selected_index = 0;
            Effect::None
        }
        DashboardAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            Effect::None
        }
        DashboardAction::MoveDown => {
            let len = state.visible_tickets().len();
            if len > 0 {
                state.selected_index = (state.selected_index + 1).min(len - 1);
            }
            Effect::None
        }
        DashboardAction::OpenDetail => {
            state.detail = state.selected_ticket().cloned();
            Effect::None
        }
        DashboardAction::CloseDetail => {
            state.detail = None;
            Effect::None
        }
        DashboardAction::ResolveSelected => {
            let target = state
                .detail
                .clone()
                .or_else(|| state.selected_ticket().cloned());
            match target {
                Some(ticket) if ticket.is_open() => {
                    state.detail = None;
                    Effect::Resolve(ticket.id)
                }
                Some(_) => {
                    state.toast = Some(Toast::info(ALREADY_RESOLVED_TOAST));
                    Effect::None
                }
                None => Effect::None,
            }
        }
        DashboardAction::Retry | DashboardAction::Refresh => Effect::ReloadAll,
        DashboardAction::DismissToast => {
            state.toast = None;
            Effect::None
        }
        DashboardAction::Quit => {
            state.should_exit = true;
            Effect::None
        }
    }
}
