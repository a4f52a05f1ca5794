//! Dashboard view model and key handling tests
//!
//! These drive `DashboardState` through `reduce` the same way the TUI does
//! and check what ends up on screen.

use iocraft::prelude::{KeyCode, KeyModifiers};
use ticketdesk::dashboard::{DashboardAction, DashboardState, Effect, reduce};
use ticketdesk::tui::dashboard::model::{
    ContentViewModel, compute_dashboard_view_model, key_to_action,
};
use ticketdesk::types::{Category, Ticket, TicketId, TicketPage, TicketStatus};

fn ticket(id: u64, category: Category, status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId::from(id),
        ticket_id: format!("TCK-{id}"),
        sender_email: format!("user{id}@example.com"),
        message: "x".repeat(150),
        category,
        confidence: 0.5,
        status,
        created_at: jiff::civil::date(2024, 1, 2).at(3, 4, 5, 0),
    }
}

fn loaded_state() -> DashboardState {
    let mut state = DashboardState::new(20);
    state.begin_page_load();
    state.apply_page_result(Ok(TicketPage {
        content: vec![
            ticket(1, Category::Technology, TicketStatus::Open),
            ticket(2, Category::Refund, TicketStatus::Open),
            ticket(3, Category::Technology, TicketStatus::Resolved),
            ticket(4, Category::Finance, TicketStatus::Open),
        ],
        total_pages: 3,
        total_elements: 45,
    }));
    state
}

fn press(state: &mut DashboardState, code: KeyCode) -> Effect {
    match key_to_action(code, KeyModifiers::NONE, state) {
        Some(action) => reduce(state, action),
        None => Effect::None,
    }
}

// ============================================================================
// View model
// ============================================================================

#[test]
fn test_pagination_text() {
    let state = loaded_state();
    let vm = compute_dashboard_view_model(&state, Some("localhost:8080"), 10);

    insta::assert_snapshot!(vm.pagination.showing, @"Showing 4 of 45 tickets");
    insta::assert_snapshot!(vm.pagination.position, @"Page 1 of 3");
    assert!(!vm.pagination.can_prev);
    assert!(vm.pagination.can_next);
    assert_eq!(vm.pagination.page_size, 20);
}

#[test]
fn test_distribution_bars_cover_page() {
    let state = loaded_state();
    let vm = compute_dashboard_view_model(&state, None, 10);

    let labels: Vec<String> = vm
        .distribution
        .iter()
        .map(|b| format!("{}={}", b.category, b.count))
        .collect();
    insta::assert_snapshot!(labels.join(" "), @"Technology=2 Refund=1 Finance=1");
    assert!((vm.distribution[0].fraction - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_filter_narrows_cards_but_not_distribution() {
    let mut state = loaded_state();
    press(&mut state, KeyCode::Char('c'));
    let vm = compute_dashboard_view_model(&state, None, 10);

    let ContentViewModel::Tickets(list) = &vm.content else {
        panic!("expected tickets");
    };
    assert_eq!(list.cards.len(), 2);
    assert!(list.cards.iter().all(|c| c.ticket.category == Category::Technology));
    assert_eq!(vm.distribution.len(), 3);
    assert_eq!(vm.filter.category, "Technology");
    assert!(vm.filter.is_filtered);
    insta::assert_snapshot!(vm.pagination.showing, @"Showing 2 of 45 tickets");
}

#[test]
fn test_filter_with_no_matches_shows_empty() {
    let mut state = loaded_state();
    // Technology -> Accounts
    press(&mut state, KeyCode::Char('c'));
    press(&mut state, KeyCode::Char('c'));
    let vm = compute_dashboard_view_model(&state, None, 10);
    assert_eq!(vm.content, ContentViewModel::Empty);

    press(&mut state, KeyCode::Char('0'));
    let vm = compute_dashboard_view_model(&state, None, 10);
    assert!(matches!(vm.content, ContentViewModel::Tickets(_)));
    assert!(!vm.filter.is_filtered);
}

#[test]
fn test_header_shows_loading_then_clears() {
    let mut state = DashboardState::new(20);
    state.begin_page_load();
    let vm = compute_dashboard_view_model(&state, Some("desk.example.com"), 4);
    assert_eq!(vm.header.status.as_deref(), Some("Loading..."));
    assert_eq!(vm.content, ContentViewModel::Loading);

    state.apply_page_result(Ok(TicketPage::default()));
    let vm = compute_dashboard_view_model(&state, Some("desk.example.com"), 4);
    assert_eq!(vm.header.status, None);
    assert_eq!(vm.content, ContentViewModel::Empty);
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_navigation_keys() {
    let mut state = loaded_state();

    assert_eq!(press(&mut state, KeyCode::Char('j')), Effect::None);
    assert_eq!(press(&mut state, KeyCode::Down), Effect::None);
    assert_eq!(state.selected_index, 2);
    press(&mut state, KeyCode::Up);
    assert_eq!(state.selected_index, 1);

    assert_eq!(press(&mut state, KeyCode::Char('n')), Effect::LoadPage);
    assert_eq!(state.query.page, 1);
    assert_eq!(state.selected_index, 0);
    assert_eq!(press(&mut state, KeyCode::Left), Effect::LoadPage);
    assert_eq!(state.query.page, 0);
    assert_eq!(press(&mut state, KeyCode::Char('p')), Effect::None);
}

#[test]
fn test_page_size_key_cycles() {
    let mut state = loaded_state();

    assert_eq!(press(&mut state, KeyCode::Char('s')), Effect::LoadPage);
    assert_eq!(state.query.size, 50);
    press(&mut state, KeyCode::Char('s'));
    assert_eq!(state.query.size, 10);
    press(&mut state, KeyCode::Char('s'));
    assert_eq!(state.query.size, 20);
}

#[test]
fn test_detail_modal_flow() {
    let mut state = loaded_state();
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Enter);

    let vm = compute_dashboard_view_model(&state, None, 10);
    let detail = vm.detail.expect("modal open");
    assert_eq!(detail.title, "Ticket TCK-2");
    assert_eq!(detail.message.len(), 150);
    assert!(detail.can_resolve);

    assert_eq!(
        press(&mut state, KeyCode::Char('x')),
        Effect::Resolve(TicketId::from(2))
    );
    assert!(state.detail.is_none());
}

#[test]
fn test_escape_closes_modal_before_toast() {
    let mut state = loaded_state();
    state.begin_page_load();
    state.apply_page_result(Err("offline".to_string()));
    press(&mut state, KeyCode::Enter);
    assert!(state.detail.is_some());
    assert!(state.toast.is_some());

    press(&mut state, KeyCode::Esc);
    assert!(state.detail.is_none());
    assert!(state.toast.is_some());

    press(&mut state, KeyCode::Esc);
    assert!(state.toast.is_none());
}

#[test]
fn test_quit_key() {
    let mut state = loaded_state();
    assert_eq!(
        key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, &state),
        Some(DashboardAction::Quit)
    );
    press(&mut state, KeyCode::Char('q'));
    assert!(state.should_exit);
}
