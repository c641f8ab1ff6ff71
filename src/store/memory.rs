use super::*;

use std::cell::RefCell;

/// Store that keeps the collection in process memory.
///
/// Nothing outlives the process. Useful for tests and benchmarks that exercise the
/// manager without touching the filesystem.
#[derive(Default)]
pub struct MemStore {
    pub data: RefCell<Vec<Customer>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            data: RefCell::new(customers),
        }
    }
}

impl CustomerStore for MemStore {
    fn load(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, customers: &[Customer]) -> Result<(), AppError> {
        *self.data.borrow_mut() = customers.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
