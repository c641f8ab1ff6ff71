use crate::domain::customer::NewCustomer;
use std::path::PathBuf;

use super::*;
use csv::Reader;

const IMPORT_PATH: &str = "./import_export/customers.csv";

/// Reads customer rows from a CSV file with `name`, `email` and `phone` headers.
///
/// Identifiers in the file, if any, are ignored: imported rows are numbered by the
/// manager like any other new customer.
pub fn import_customers_from_csv(
    src: Option<&str>,
) -> Result<(PathBuf, Vec<NewCustomer>), AppError> {
    let file_path = src.map_or_else(|| PathBuf::from(IMPORT_PATH), PathBuf::from);

    if !file_path.exists() {
        return Err(AppError::Validation(format!(
            "CSV file {} not found",
            file_path.display()
        )));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: NewCustomer = result?;
        rows.push(record);
    }

    Ok((file_path, rows))
}
