use crate::{
    cli::{
        command::{Cli, Commands},
        display_customers,
        menu::Menu,
        update_message,
    },
    domain::{CustomerManager, CustomerPatch},
    errors::AppError,
    store::{
        JsonStore,
        storage_port::{export_customers_to_csv, import_customers_from_csv},
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::io;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    debug!(data_file = %cli.data_file, "opening customer records");
    let mut manager = CustomerManager::new(Box::new(JsonStore::new(&cli.data_file)))?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Add { name, email, phone } => {
            let customer =
                manager.add(name, email.unwrap_or_default(), phone.unwrap_or_default())?;

            println!(
                "Customer {} added successfully with ID {}.",
                customer.name, customer.id
            );
            Ok(())
        }

        Commands::List => {
            println!("{}", display_customers(manager.list()));
            Ok(())
        }

        Commands::Show { id } => {
            println!("{}", manager.find_by_id(id)?);
            Ok(())
        }

        Commands::Update {
            id,
            name,
            email,
            phone,
        } => {
            let patch = CustomerPatch { name, email, phone };
            manager.update(id, patch.clone())?;

            println!("{}", update_message(id, &patch));
            Ok(())
        }

        Commands::Delete { id } => {
            manager.delete(id)?;

            println!("Customer {id} deleted successfully.");
            Ok(())
        }

        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(&mut manager, stdin.lock(), io::stdout());
            menu.run()
        }

        // Import customers into storage from .csv file
        Commands::Import { src } => {
            let (path, rows) = import_customers_from_csv(src.as_deref())?;
            let total = manager.import(rows)?;

            println!("Successfully imported {} customers from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_customers_to_csv(manager.list(), des.as_deref())?;

            println!("Successfully exported {} customers to {:?}.", total, path);
            Ok(())
        }
    }
}
