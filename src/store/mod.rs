pub mod json;
pub mod memory;
pub mod storage_port;

use crate::domain::customer::Customer;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use json::JsonStore;
pub use memory::MemStore;

/// Whole-collection persistence for customers.
///
/// Every call is a full round trip: `load` reads the entire collection and `save`
/// replaces it. Implementations keep no state between calls.
pub trait CustomerStore {
    fn load(&self) -> Result<Vec<Customer>, AppError>;

    fn save(&self, customers: &[Customer]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
