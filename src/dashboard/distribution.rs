use serde::Serialize;

use crate::types::{Category, Ticket};

/// Number of tickets carrying one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count tickets per category for a single page.
///
/// Categories appear in the order they are first seen on the page; labels
/// with no tickets are omitted. The result describes only the page given, not
/// the whole ticket collection.
pub fn compute_category_distribution(tickets: &[Ticket]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for ticket in tickets {
        match counts.iter_mut().find(|c| c.category == ticket.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: ticket.category,
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TicketId, TicketStatus};

    fn ticket(category: Category) -> Ticket {
        Ticket {
            id: TicketId::from(1),
            ticket_id: "TCK-1".to_string(),
            sender_email: "a@example.com".to_string(),
            message: String::new(),
            category,
            confidence: 0.5,
            status: TicketStatus::Open,
            created_at: jiff::civil::date(2024, 3, 1).at(0, 0, 0, 0),
        }
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let tickets = vec![
            ticket(Category::Refund),
            ticket(Category::Finance),
            ticket(Category::Refund),
            ticket(Category::Delivery),
            ticket(Category::Refund),
        ];
        let dist = compute_category_distribution(&tickets);
        assert_eq!(
            dist,
            vec![
                CategoryCount {
                    category: Category::Refund,
                    count: 3
                },
                CategoryCount {
                    category: Category::Finance,
                    count: 1
                },
                CategoryCount {
                    category: Category::Delivery,
                    count: 1
                },
            ]
        );
        let total: usize = dist.iter().map(|c| c.count).sum();
        assert_eq!(total, tickets.len());
    }

    #[test]
    fn test_empty_page() {
        assert!(compute_category_distribution(&[]).is_empty());
    }
}
