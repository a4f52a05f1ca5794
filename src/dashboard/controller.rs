//! Ticket fetch controller
//!
//! Owns the dashboard state and talks to the backend. Every operation is
//! safe to fire and forget: results land in the shared state and observers
//! are woken through a watch channel carrying a revision counter.
//!
//! Concurrent requests are not ordered. Whichever response arrives last wins,
//! so a slow page request can overwrite a newer one.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::TicketApi;
use crate::types::{StatKind, TicketId};

use super::state::{DashboardAction, DashboardState, Effect, reduce};

/// Shared handle to the dashboard state and the backend
#[derive(Clone)]
pub struct TicketFetchController {
    api: Arc<dyn TicketApi>,
    state: Arc<Mutex<DashboardState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl TicketFetchController {
    pub fn new(api: Arc<dyn TicketApi>, page_size: u32) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            api,
            state: Arc::new(Mutex::new(DashboardState::new(page_size))),
            revision: Arc::new(revision),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Run a closure against the current state without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.lock())
    }

    /// Receiver that changes every time the state does
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let result = f(&mut self.state.lock());
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
        result
    }

    /// Fetch the page described by the current query.
    ///
    /// On failure the previous tickets stay in place and an error toast is
    /// raised.
    pub async fn load_page(&self) {
        let query = self.update(|state| state.begin_page_load());
        tracing::debug!(page = query.page, size = query.size, "loading tickets");

        let result = self.api.fetch_page(&query).await;
        match &result {
            Err(e) if e.is_request_failure() => {
                tracing::warn!(error = %e, page = query.page, "failed to load tickets")
            }
            Err(e) => tracing::error!(error = %e, page = query.page, "failed to load tickets"),
            Ok(_) => {}
        }

        self.update(|state| state.apply_page_result(result.map_err(|e| e.to_string())));
    }

    /// Fetch the four aggregate statistics.
    ///
    /// Each one is applied as soon as it arrives; a failed statistic keeps
    /// its previous value.
    pub async fn load_aggregate_stats(&self) {
        let requests = StatKind::ALL.into_iter().map(|kind| async move {
            match self.api.fetch_stat(kind).await {
                Ok(value) => self.update(|state| state.apply_stat(value)),
                Err(e) => tracing::warn!(stat = kind.label(), error = %e, "failed to load statistic"),
            }
        });
        join_all(requests).await;
    }

    /// Resolve a ticket, then reload the page and statistics.
    ///
    /// Ticket state is never changed locally: the reload is what shows the new
    /// status. Returns whether the backend accepted the request.
    pub async fn resolve_ticket(&self, id: &TicketId) -> bool {
        tracing::info!(ticket = %id, "resolving ticket");
        match self.api.resolve_ticket(id).await {
            Ok(()) => {
                self.update(|state| state.apply_resolve_result(true));
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::warn!(ticket = %id, error = %e, "failed to resolve ticket");
                self.update(|state| state.apply_resolve_result(false));
                false
            }
        }
    }

    /// Reload the page and statistics concurrently
    pub async fn refresh(&self) {
        tokio::join!(self.load_page(), self.load_aggregate_stats());
    }

    pub fn spawn_load_page(&self) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.load_page().await })
    }

    pub fn spawn_resolve_ticket(&self, id: TicketId) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            this.resolve_ticket(&id).await;
        })
    }

    pub fn spawn_refresh(&self) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.refresh().await })
    }

    /// Apply a user action and start whatever request it implies.
    ///
    /// Must be called from within a tokio runtime. The returned handle, if
    /// any, completes once the request has been applied to the state.
    pub fn dispatch(&self, action: DashboardAction) -> Option<JoinHandle<()>> {
        let effect = self.update(|state| reduce(state, action));
        match effect {
            Effect::None => None,
            Effect::LoadPage => Some(self.spawn_load_page()),
            Effect::Resolve(id) => Some(self.spawn_resolve_ticket(id)),
            Effect::ReloadAll => Some(self.spawn_refresh()),
        }
    }

    /// Drop an expired toast. Returns true if the state changed.
    pub fn expire_toast(&self, now: Instant) -> bool {
        let expired = self.state.lock().expire_toast(now);
        if expired {
            self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
        }
        expired
    }
}
