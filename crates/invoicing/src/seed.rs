//! Default invoice a new session starts from.

use chrono::{Days, NaiveDate};

use invoicer_core::LineItemId;

use crate::amount::Amount;
use crate::invoice::{Invoice, LineItem, Party};

/// Days between the invoice date and the due date of a fresh invoice.
pub const DUE_IN_DAYS: u64 = 30;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the seed invoice for a session started on `today`.
///
/// Everything except the two item ids is a pure function of `today`.
pub fn seeded(today: NaiveDate) -> Invoice {
    // Dates at the very end of chrono's range have no "+30 days"; fall back to today.
    let due = today.checked_add_days(Days::new(DUE_IN_DAYS)).unwrap_or(today);

    Invoice {
        invoice_number: "INV-001".to_string(),
        invoice_date: today.format(DATE_FORMAT).to_string(),
        due_date: due.format(DATE_FORMAT).to_string(),
        from: Party::new(
            "Your Company",
            "123 Main St, Anytown, USA",
            "contact@yourcompany.com",
        ),
        to: Party::new(
            "Client Company",
            "456 Oak Ave, Sometown, USA",
            "client@example.com",
        ),
        items: vec![
            seed_item("Web Development Services", 10, 150),
            seed_item("UI/UX Design", 5, 100),
        ],
        notes: "Thank you for your business!".to_string(),
        currency: "$".to_string(),
    }
}

fn seed_item(description: &str, quantity: u32, unit_price: u32) -> LineItem {
    LineItem::new(
        LineItemId::new(),
        description,
        Amount::from(quantity),
        Amount::from(unit_price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_is_thirty_days_out() {
        let invoice = seeded(date(2024, 1, 15));
        assert_eq!(invoice.invoice_date, "2024-01-15");
        assert_eq!(invoice.due_date, "2024-02-14");
    }

    #[test]
    fn due_date_crosses_year_boundary() {
        let invoice = seeded(date(2023, 12, 20));
        assert_eq!(invoice.due_date, "2024-01-19");
    }

    #[test]
    fn seed_has_two_items_with_distinct_ids() {
        let invoice = seeded(date(2024, 6, 1));
        assert_eq!(invoice.items.len(), 2);
        assert_ne!(invoice.items[0].id, invoice.items[1].id);
        assert_eq!(invoice.total(), 10.0 * 150.0 + 5.0 * 100.0);
    }

    #[test]
    fn seed_is_deterministic_apart_from_ids() {
        let mut a = seeded(date(2024, 6, 1));
        let mut b = seeded(date(2024, 6, 1));
        for item in a.items.iter_mut().chain(b.items.iter_mut()) {
            item.id = LineItemId::from_uuid(Default::default());
        }
        assert_eq!(a, b);
    }
}
