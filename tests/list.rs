use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn listing_format(id: u64, name: &str, email: &str, phone: &str) -> String {
    format!("{id:>3}. {name:<20} {email:^30} {phone:<15}")
}

#[test]
fn listing_customers() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("customers.json");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers in the database."));

    let customers = [
        ("Patricia", "lmartinez@bender-patterson.net", "08066809241"),
        ("Diane", "grahammatthew@gmail.com", "08064879199"),
        ("John", "wendy59@turner.com", "08046516806"),
    ];

    for (name, email, phone) in customers {
        Command::cargo_bin(env!("CARGO_PKG_NAME"))?
            .env("CRM_DATA_FILE", &data_file)
            .args(["add", "--name", name, "--email", email, "--phone", phone])
            .assert()
            .success();
    }

    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output)?;

    let expected: Vec<String> = customers
        .iter()
        .enumerate()
        .map(|(i, (name, email, phone))| listing_format(i as u64 + 1, name, email, phone))
        .collect();

    // insertion order survives the round trip through the file
    let lines: Vec<&str> = output.lines().map(str::trim_end).collect();
    let expected: Vec<&str> = expected.iter().map(|l| l.trim_end()).collect();
    assert_eq!(lines, expected);

    Ok(())
}

#[test]
fn show_single_customer() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data_file = dir.path().join("customers.json");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .args(["add", "--name", "Alice", "--email", "a@x.com", "--phone", "1"])
        .assert()
        .success();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .args(["show", "--id", "1"])
        .assert()
        .success()
        .stdout("ID: 1\nName: Alice\nEmail: a@x.com\nPhone: 1\n");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CRM_DATA_FILE", &data_file)
        .args(["show", "--id", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Customer with ID 2 not found."));

    Ok(())
}
