use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: u64,

    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields of a customer that does not have an identifier yet.
///
/// Rows read during a CSV import land here before the manager numbers them.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct NewCustomer {
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,
}

/// Sparse update of a customer.
///
/// `None` leaves the stored value untouched. An empty string is treated the same
/// way since there is no operation that clears a field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Customer {
    pub fn new(id: u64, name: String, email: String, phone: String) -> Self {
        Customer {
            id,
            name,
            email,
            phone,
        }
    }

    /// Overwrites the fields supplied in `patch`. Returns true when anything changed.
    pub fn apply(&mut self, patch: CustomerPatch) -> bool {
        let mut changed = false;

        for (field, value) in [
            (&mut self.name, patch.name),
            (&mut self.email, patch.email),
            (&mut self.phone, patch.phone),
        ] {
            if let Some(value) = value
                && !value.is_empty()
            {
                changed |= *field != value;
                *field = value;
            }
        }

        changed
    }
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}\n\
            Name: {}\n\
            Email: {}\n\
            Phone: {}",
            self.id, self.name, self.email, self.phone
        )
    }
}
