pub mod export_csv;
pub mod import_csv;

use super::*;
pub use export_csv::export_customers_to_csv;
pub use import_csv::import_customers_from_csv;
