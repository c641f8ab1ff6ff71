use std::path::PathBuf;

use super::*;
use csv::Writer;

const EXPORT_PATH: &str = "./import_export/exported.csv";

/// Writes `customers` to a CSV file and returns the destination and row count.
///
/// A directory destination gets `exported.csv` appended. Any other destination must
/// carry the `.csv` extension.
pub fn export_customers_to_csv(
    customers: &[Customer],
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_none_or(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;

    for customer in customers {
        writer.serialize(customer)?;
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
