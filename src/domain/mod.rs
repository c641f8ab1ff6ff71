pub mod customer;
pub mod manager;

use crate::errors::AppError;
use crate::store::CustomerStore;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use manager::CustomerManager;
