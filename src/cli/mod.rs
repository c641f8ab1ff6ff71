pub mod command;
pub mod menu;
pub mod run;

use crate::domain::{Customer, CustomerPatch};

pub use run::run_app;

/// One line per customer, or a notice when there are none.
pub fn display_customers(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers in the database.".to_string();
    }

    customers
        .iter()
        .map(|c| {
            format!(
                "{:>3}. {:<20} {:^30} {:<15}",
                c.id, c.name, c.email, c.phone
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Confirmation for an update, noting when no field was supplied.
pub fn update_message(id: u64, patch: &CustomerPatch) -> String {
    if patch.is_empty() {
        format!("No fields supplied, customer {id} left unchanged.")
    } else {
        format!("Customer {id} updated successfully.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_customers_in_order() {
        let customers = vec![
            Customer::new(1, "Alice".into(), "a@x.com".into(), "1".into()),
            Customer::new(2, "Bob".into(), "b@x.com".into(), "2".into()),
        ];

        let shown = display_customers(&customers);
        let lines: Vec<&str> = shown.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. Alice"));
        assert!(lines[1].starts_with("  2. Bob"));
    }

    #[test]
    fn empty_list_has_notice() {
        assert_eq!(display_customers(&[]), "No customers in the database.");
    }

    #[test]
    fn update_message_reflects_patch() {
        let blank = CustomerPatch {
            email: Some(String::new()),
            ..Default::default()
        };
        let phone = CustomerPatch {
            phone: Some("555".into()),
            ..Default::default()
        };

        assert_eq!(
            update_message(4, &blank),
            "No fields supplied, customer 4 left unchanged."
        );
        assert_eq!(update_message(4, &phone), "Customer 4 updated successfully.");
    }
}
