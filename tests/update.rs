use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

fn add(data_file: &Path, name: &str, email: &str, phone: &str) -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", data_file)
        .args(["add", "--name", name, "--email", email, "--phone", phone])
        .assert()
        .success()
        .stdout(contains("added successfully"));
    Ok(())
}

fn read_records(data_file: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    Ok(serde_json::from_str(&fs::read_to_string(data_file)?)?)
}

#[test]
fn update_is_sparse() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("customers.json");

    add(&data_file, "Alice", "a@x.com", "1")?;

    // Edit the customer (change phone only)
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .args(["update", "--id", "1", "--phone", "09123456789"])
        .assert()
        .success()
        .stdout(contains("Customer 1 updated successfully."));

    let records = read_records(&data_file)?;
    assert_eq!(records[0]["name"], "Alice");
    assert_eq!(records[0]["email"], "a@x.com");
    assert_eq!(records[0]["phone"], "09123456789");

    // No fields at all leaves the record as it was
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .args(["update", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("No fields supplied, customer 1 left unchanged."));

    assert_eq!(read_records(&data_file)?, records);

    Ok(())
}

#[test]
fn update_unknown_customer_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("customers.json");

    add(&data_file, "Alice", "a@x.com", "1")?;
    let before = fs::read_to_string(&data_file)?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .args(["update", "--id", "5", "--name", "Zed"])
        .assert()
        .failure()
        .stderr(contains("Error: Customer with ID 5 not found."));

    assert_eq!(fs::read_to_string(&data_file)?, before);

    Ok(())
}
