use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not decode customer data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Customer with ID {0} not found.")]
    NotFound(u64),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}
