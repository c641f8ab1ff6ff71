use super::*;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

pub const STORAGE_PATH: &str = "customers.json";

pub struct JsonStore {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

/// Pretty JSON with 4-space indentation.
///
/// A value that cannot be encoded is reported as an I/O failure of the write.
fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer).map_err(io::Error::from)?;
    Ok(data)
}

impl CustomerStore for JsonStore {
    fn load(&self) -> Result<Vec<Customer>, AppError> {
        if !fs::exists(&self.path)? {
            debug!(path = %self.path.display(), "backing file missing, starting empty");
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let customers: Vec<Customer> = serde_json::from_str(&data)?;

        debug!(path = %self.path.display(), count = customers.len(), "loaded customers");
        Ok(customers)
    }

    fn save(&self, customers: &[Customer]) -> Result<(), AppError> {
        if !self.path.exists() {
            create_file_parent(&self.path)?;
        }

        let data = encode_pretty(customers)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;

        debug!(path = %self.path.display(), count = customers.len(), "saved customers");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
