pub use crate::cli::{command, menu::Menu, run_app};
pub use crate::domain::{
    customer::{self, Customer, CustomerPatch, NewCustomer},
    manager::CustomerManager,
};
pub use crate::errors::AppError;
pub use crate::store::{self, CustomerStore, JsonStore, MemStore};
