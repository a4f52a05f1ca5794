//! Support ticket dashboard (`ticketdesk dashboard`)
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | Header                                    |
//! | Stats panel                               |
//! | Filter bar                                |
//! +------------------------------+-----------+
//! | Ticket cards                 | Category  |
//! |                              | chart     |
//! +------------------------------+-----------+
//! | Pagination                                |
//! | Toast / Footer                            |
//! +------------------------------------------+
//! ```
//!
//! All state lives in the [`TicketFetchController`]. The component re-renders
//! whenever the controller's revision counter moves.

use std::time::{Duration, Instant};

use iocraft::prelude::*;

use crate::dashboard::TicketFetchController;
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, Header, TicketCard, render_toast,
};
use crate::tui::theme::theme;

use super::components::{DetailModal, DistributionChart, FilterBar, PaginationBar, StatsPanel};
use super::model::{ContentViewModel, compute_dashboard_view_model, key_to_action};

/// Rows taken by one ticket card, borders included
const CARD_HEIGHT: u16 = 7;

/// Width of the category chart column
const SIDEBAR_WIDTH: u16 = 34;

/// How often expired toasts are swept
const TOAST_SWEEP_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Default, Props)]
pub struct DashboardProps {
    pub controller: Option<TicketFetchController>,
    /// Backend host shown in the header
    pub host: Option<String>,
}

#[component]
pub fn Dashboard<'a>(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let revision = hooks.use_state(|| 0u64);

    // Initial load, then follow the controller's revision counter
    hooks.use_future({
        let controller = props.controller.clone();
        let mut revision = revision;
        async move {
            let Some(controller) = controller else {
                return;
            };
            let mut changes = controller.subscribe();
            let _ = controller.spawn_refresh();
            while changes.changed().await.is_ok() {
                revision.set(*changes.borrow_and_update());
            }
        }
    });

    hooks.use_future({
        let controller = props.controller.clone();
        async move {
            let Some(controller) = controller else {
                return;
            };
            let mut sweep = tokio::time::interval(TOAST_SWEEP_INTERVAL);
            loop {
                sweep.tick().await;
                controller.expire_toast(Instant::now());
            }
        }
    });

    hooks.use_terminal_events({
        let controller = props.controller.clone();
        move |event| {
            let Some(controller) = controller.as_ref() else {
                return;
            };
            match event {
                TerminalEvent::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => {
                    let action =
                        controller.with_state(|state| key_to_action(code, modifiers, state));
                    if let Some(action) = action {
                        let _ = controller.dispatch(action);
                    }
                }
                _ => {}
            }
        }
    });

    let Some(controller) = props.controller.as_ref() else {
        return element! {
            View(width, height) {
                EmptyState(kind: EmptyStateKind::Loading)
            }
        }
        .into_any();
    };

    // Subscribe this render to the counter
    let _ = revision.get();
    let state = controller.snapshot();

    if state.should_exit {
        system.exit();
    }

    let theme = theme();

    // header 1 + stats 4 + filter 1 + pagination 1 + footer 1
    let mut list_height = height.saturating_sub(8);
    if state.toast.is_some() {
        list_height = list_height.saturating_sub(3);
    }
    if state.error().is_some() && state.page.data().is_some() {
        list_height = list_height.saturating_sub(1);
    }
    let card_capacity = (list_height / CARD_HEIGHT).max(1) as usize;

    let vm = compute_dashboard_view_model(&state, props.host.as_deref(), card_capacity);
    let bar_width = SIDEBAR_WIDTH.saturating_sub(18);

    let list: AnyElement<'static> = match vm.content {
        ContentViewModel::Loading => element! {
            EmptyState(kind: EmptyStateKind::Loading)
        }
        .into_any(),
        ContentViewModel::Failed(message) => element! {
            EmptyState(kind: EmptyStateKind::LoadFailed, message: Some(message))
        }
        .into_any(),
        ContentViewModel::Empty => element! {
            EmptyState(kind: EmptyStateKind::NoTickets)
        }
        .into_any(),
        ContentViewModel::Tickets(list) => element! {
            View(width: 100pct, flex_direction: FlexDirection::Column) {
                #(if list.hidden_above > 0 {
                    Some(element! {
                        Text(content: format!("  ^ {} more", list.hidden_above), color: theme.text_dimmed)
                    })
                } else {
                    None
                })
                #(list.cards.into_iter().map(|card| element! {
                    TicketCard(ticket: Some(card.ticket), is_selected: card.is_selected)
                }))
                #(if list.hidden_below > 0 {
                    Some(element! {
                        Text(content: format!("  v {} more", list.hidden_below), color: theme.text_dimmed)
                    })
                } else {
                    None
                })
            }
        }
        .into_any(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
            position: Position::Relative,
        ) {
            Header(
                title: vm.header.title,
                subtitle: vm.header.host,
                status: vm.header.status,
            )
            StatsPanel(stats: vm.stats)
            FilterBar(filter: vm.filter)
            #(vm.error_banner.map(|message| element! {
                View(width: 100pct, height: 1, padding_left: 1, flex_shrink: 0.0) {
                    Text(content: format!("! {message}"), color: theme.error, weight: Weight::Bold)
                }
            }))
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
                overflow: Overflow::Hidden,
            ) {
                View(flex_grow: 1.0, height: 100pct, overflow: Overflow::Hidden) {
                    #(Some(list))
                }
                View(width: SIDEBAR_WIDTH, flex_shrink: 0.0) {
                    DistributionChart(bars: vm.distribution, bar_width)
                }
            }
            PaginationBar(pagination: vm.pagination)
            #(render_toast(&vm.toast))
            Footer(shortcuts: vm.shortcuts)
            DetailModal(detail: vm.detail)
        }
    }
    .into_any()
}
