//! Dashboard view model and key mapping
//!
//! `compute_dashboard_view_model` turns a [`DashboardState`] into plain data
//! the components render, and `key_to_action` maps key presses onto
//! [`DashboardAction`]s. Both are pure so the dashboard can be tested without
//! a terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::dashboard::{DashboardAction, DashboardState, Toast};
use crate::display::{
    format_confidence, format_created_at, format_page_position, format_showing, share,
};
use crate::tui::components::footer::{
    Shortcut, dashboard_shortcuts, detail_shortcuts, error_shortcuts,
};
use crate::types::{Category, StatKind, Ticket, TicketStatus};

pub const DASHBOARD_TITLE: &str = "Support Tickets";

/// Everything the dashboard renders
#[derive(Debug, Clone)]
pub struct DashboardViewModel {
    pub header: HeaderViewModel,
    pub filter: FilterBarViewModel,
    pub content: ContentViewModel,
    /// Error shown above still-visible tickets from an earlier load
    pub error_banner: Option<String>,
    pub pagination: PaginationViewModel,
    pub stats: Vec<StatViewModel>,
    pub distribution: Vec<DistributionBarViewModel>,
    pub detail: Option<DetailViewModel>,
    pub toast: Option<Toast>,
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub title: String,
    pub host: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterBarViewModel {
    pub category: String,
    pub status: String,
    pub is_filtered: bool,
}

/// What occupies the main list area
#[derive(Debug, Clone, PartialEq)]
pub enum ContentViewModel {
    /// First load in flight, nothing to show yet
    Loading,
    /// Listing failed and there is no earlier page
    Failed(String),
    /// Loaded, but nothing passes the filter
    Empty,
    Tickets(TicketListViewModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketListViewModel {
    /// Cards in the visible window
    pub cards: Vec<CardViewModel>,
    /// Number of filtered tickets above the window
    pub hidden_above: usize,
    /// Number of filtered tickets below the window
    pub hidden_below: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    pub ticket: Ticket,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationViewModel {
    pub showing: String,
    pub position: String,
    pub can_prev: bool,
    pub can_next: bool,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatViewModel {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionBarViewModel {
    pub category: Category,
    pub count: usize,
    /// Share of the page's tickets, in [0, 1]
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub title: String,
    pub status: TicketStatus,
    pub sender: String,
    pub category: Category,
    pub confidence: String,
    pub created_at: String,
    pub message: String,
    pub can_resolve: bool,
}

impl DetailViewModel {
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            title: format!("Ticket {}", ticket.ticket_id),
            status: ticket.status,
            sender: ticket.sender_email.clone(),
            category: ticket.category,
            confidence: format!("{} match", format_confidence(ticket.confidence)),
            created_at: format_created_at(&ticket.created_at),
            message: ticket.message.clone(),
            can_resolve: ticket.is_open(),
        }
    }
}

/// First index of the window of `capacity` cards that keeps `selected` visible
pub fn window_start(selected: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    if selected >= capacity {
        selected + 1 - capacity
    } else {
        0
    }
}

/// Compute the view model.
///
/// `card_capacity` is how many ticket cards fit on screen.
pub fn compute_dashboard_view_model(
    state: &DashboardState,
    host: Option<&str>,
    card_capacity: usize,
) -> DashboardViewModel {
    let visible = state.visible_tickets();
    let has_data = state.page.data().is_some();

    let content = if !has_data {
        match state.error() {
            Some(message) => ContentViewModel::Failed(message.to_string()),
            None => ContentViewModel::Loading,
        }
    } else if visible.is_empty() {
        ContentViewModel::Empty
    } else {
        let capacity = card_capacity.max(1);
        let selected = state.selected_index.min(visible.len() - 1);
        let start = window_start(selected, capacity);
        let end = (start + capacity).min(visible.len());
        let cards = visible[start..end]
            .iter()
            .enumerate()
            .map(|(offset, ticket)| CardViewModel {
                ticket: (*ticket).clone(),
                is_selected: start + offset == selected,
            })
            .collect();
        ContentViewModel::Tickets(TicketListViewModel {
            cards,
            hidden_above: start,
            hidden_below: visible.len() - end,
        })
    };

    let error_banner = if has_data {
        state.error().map(str::to_string)
    } else {
        None
    };

    let status = if state.is_loading() {
        Some("Loading...".to_string())
    } else if state.error().is_some() {
        Some("Offline".to_string())
    } else {
        None
    };

    let stats = StatKind::ALL
        .into_iter()
        .map(|kind| StatViewModel {
            label: kind.label(),
            value: match kind {
                StatKind::Total => state.stats.total.to_string(),
                StatKind::Resolved => state.stats.resolved.to_string(),
                StatKind::Pending => state.stats.pending.to_string(),
                StatKind::AvgDuration => state.stats.avg_duration.clone(),
            },
        })
        .collect();

    let page_total: usize = state.distribution.iter().map(|c| c.count).sum();
    let distribution = state
        .distribution
        .iter()
        .map(|c| DistributionBarViewModel {
            category: c.category,
            count: c.count,
            fraction: share(c.count, page_total),
        })
        .collect();

    let detail = state.detail.as_ref().map(DetailViewModel::from_ticket);

    let shortcuts = match (&detail, &content) {
        (Some(d), _) => detail_shortcuts(d.can_resolve),
        (None, ContentViewModel::Failed(_)) => error_shortcuts(),
        _ => dashboard_shortcuts(),
    };

    DashboardViewModel {
        header: HeaderViewModel {
            title: DASHBOARD_TITLE.to_string(),
            host: host.map(str::to_string),
            status,
        },
        filter: FilterBarViewModel {
            category: state.filter.category.to_string(),
            status: state.filter.status.to_string(),
            is_filtered: !state.filter.is_empty(),
        },
        content,
        error_banner,
        pagination: PaginationViewModel {
            showing: format_showing(visible.len(), state.total_elements()),
            position: format_page_position(state.query.page, state.total_pages()),
            can_prev: state.can_go_prev(),
            can_next: state.can_go_next(),
            page_size: state.query.size,
        },
        stats,
        distribution,
        detail,
        toast: state.toast.clone(),
        shortcuts,
    }
}

/// Map a key press to a dashboard action
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &DashboardState,
) -> Option<DashboardAction> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(DashboardAction::Quit);
    }

    // Detail modal captures input
    if state.detail.is_some() {
        return match code {
            KeyCode::Esc => Some(DashboardAction::CloseDetail),
            KeyCode::Char('x') => Some(DashboardAction::ResolveSelected),
            KeyCode::Char('q') => Some(DashboardAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(DashboardAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::MoveUp),
        KeyCode::Char('n') | KeyCode::Right => Some(DashboardAction::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(DashboardAction::PrevPage),
        KeyCode::Char('s') => Some(DashboardAction::CyclePageSize),
        KeyCode::Char('c') => Some(DashboardAction::CycleCategoryFilter),
        KeyCode::Char('t') => Some(DashboardAction::CycleStatusFilter),
        KeyCode::Char('0') => Some(DashboardAction::ResetFilters),
        KeyCode::Enter => Some(DashboardAction::OpenDetail),
        KeyCode::Char('x') => Some(DashboardAction::ResolveSelected),
        KeyCode::Char('r') => {
            if state.error().is_some() {
                Some(DashboardAction::Retry)
            } else {
                Some(DashboardAction::Refresh)
            }
        }
        KeyCode::Esc if state.toast.is_some() => Some(DashboardAction::DismissToast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TicketId, TicketPage};

    fn ticket(id: u64, status: TicketStatus) -> Ticket {
        Ticket {
            id: TicketId::from(id),
            ticket_id: format!("TCK-{id}"),
            sender_email: "user@example.com".to_string(),
            message: "It broke".to_string(),
            category: Category::Technology,
            confidence: 0.912,
            status,
            created_at: jiff::civil::date(2024, 2, 3).at(4, 5, 6, 0),
        }
    }

    fn state_with(count: u64) -> DashboardState {
        let mut state = DashboardState::new(20);
        state.apply_page_result(Ok(TicketPage {
            content: (1..=count).map(|i| ticket(i, TicketStatus::Open)).collect(),
            total_pages: 1,
            total_elements: count,
        }));
        state
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(0, 3), 0);
        assert_eq!(window_start(2, 3), 0);
        assert_eq!(window_start(3, 3), 1);
        assert_eq!(window_start(9, 3), 7);
        assert_eq!(window_start(4, 0), 4);
    }

    #[test]
    fn test_initial_state_is_loading() {
        let vm = compute_dashboard_view_model(&DashboardState::new(20), None, 4);
        assert_eq!(vm.content, ContentViewModel::Loading);
        assert!(!vm.pagination.can_prev);
        assert!(!vm.pagination.can_next);
        assert_eq!(vm.stats[3].value, "0h");
    }

    #[test]
    fn test_list_window_follows_selection() {
        let mut state = state_with(10);
        state.selected_index = 6;
        let vm = compute_dashboard_view_model(&state, Some("localhost:8080"), 4);
        let ContentViewModel::Tickets(list) = vm.content else {
            panic!("expected tickets");
        };
        assert_eq!(list.cards.len(), 4);
        assert_eq!(list.hidden_above, 3);
        assert_eq!(list.hidden_below, 3);
        assert!(list.cards[3].is_selected);
        assert_eq!(vm.header.host.as_deref(), Some("localhost:8080"));
    }

    #[test]
    fn test_failure_with_data_shows_banner() {
        let mut state = state_with(2);
        state.begin_page_load();
        state.apply_page_result(Err("boom".to_string()));
        let vm = compute_dashboard_view_model(&state, None, 4);
        assert!(matches!(vm.content, ContentViewModel::Tickets(_)));
        assert!(vm.error_banner.is_some());
    }

    #[test]
    fn test_failure_without_data_shows_error_panel() {
        let mut state = DashboardState::new(20);
        state.begin_page_load();
        state.apply_page_result(Err("boom".to_string()));
        let vm = compute_dashboard_view_model(&state, None, 4);
        assert!(matches!(vm.content, ContentViewModel::Failed(_)));
        assert_eq!(vm.shortcuts[0].key, "r");
    }

    #[test]
    fn test_detail_view_model() {
        let detail = DetailViewModel::from_ticket(&ticket(5, TicketStatus::Open));
        assert_eq!(detail.title, "Ticket TCK-5");
        assert_eq!(detail.confidence, "91.2% match");
        assert_eq!(detail.created_at, "2024-02-03 04:05:06");
        assert!(detail.can_resolve);
    }

    #[test]
    fn test_modal_captures_keys() {
        let mut state = state_with(3);
        state.detail = state.selected_ticket().cloned();
        assert_eq!(
            key_to_action(KeyCode::Char('n'), KeyModifiers::NONE, &state),
            None
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, &state),
            Some(DashboardAction::CloseDetail)
        );
    }

    #[test]
    fn test_retry_vs_refresh() {
        let mut state = state_with(1);
        assert_eq!(
            key_to_action(KeyCode::Char('r'), KeyModifiers::NONE, &state),
            Some(DashboardAction::Refresh)
        );
        state.page.fail("down");
        assert_eq!(
            key_to_action(KeyCode::Char('r'), KeyModifiers::NONE, &state),
            Some(DashboardAction::Retry)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let state = DashboardState::default();
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL, &state),
            Some(DashboardAction::Quit)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('c'), KeyModifiers::NONE, &state),
            Some(DashboardAction::CycleCategoryFilter)
        );
    }
}
