//! Client-side view filter
//!
//! Narrows the currently loaded page by category and status. Runs entirely in
//! memory and never touches the network, so the visible card count may differ
//! from the server totals shown alongside it.

use std::fmt;

use crate::types::{Category, Ticket, TicketStatus};

/// A filter selector: either everything, or a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    /// Whether a value passes this selector
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl<T: Copy + PartialEq> Selector<T> {
    /// Advance through `All, options[0], options[1], ..., All`
    pub fn cycle(self, options: &[T]) -> Self {
        match self {
            Selector::All => options.first().copied().map_or(Selector::All, Selector::Only),
            Selector::Only(current) => options
                .iter()
                .position(|o| *o == current)
                .and_then(|i| options.get(i + 1))
                .copied()
                .map_or(Selector::All, Selector::Only),
        }
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selector::All, Selector::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("All"),
            Selector::Only(value) => value.fmt(f),
        }
    }
}

/// Category and status selectors applied to the loaded page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewFilter {
    pub category: Selector<Category>,
    pub status: Selector<TicketStatus>,
}

impl ViewFilter {
    pub fn new(category: Option<Category>, status: Option<TicketStatus>) -> Self {
        Self {
            category: category.into(),
            status: status.into(),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.category.matches(&ticket.category) && self.status.matches(&ticket.status)
    }

    /// True when neither selector narrows anything
    pub fn is_empty(&self) -> bool {
        self.category.is_all() && self.status.is_all()
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.cycle(&Category::ALL);
    }

    pub fn cycle_status(&mut self) {
        self.status = self.status.cycle(&TicketStatus::ALL);
    }

    pub fn reset(&mut self) {
        *self = ViewFilter::default();
    }
}

/// Return the tickets that pass `filter`, preserving server order.
pub fn filter_tickets<'a>(tickets: &'a [Ticket], filter: &ViewFilter) -> Vec<&'a Ticket> {
    tickets.iter().filter(|t| filter.matches(t)).collect()
}
