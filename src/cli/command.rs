use clap::{Parser, Subcommand};

use crate::store::json::STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "rusty-crm", version, about = "Simple Customer Record Manager")]
pub struct Cli {
    /// JSON file holding the customer records
    #[arg(long, env = "CRM_DATA_FILE", default_value_t = String::from(STORAGE_PATH))]
    pub data_file: String,

    // None starts the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new customer
    Add {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer email address
        #[arg(long)]
        email: Option<String>,

        /// Customer phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// List customers
    List,
    /// Show a single customer
    Show {
        /// Customer ID
        #[arg(long)]
        id: u64,
    },
    /// Update an existing customer
    /// Only the fields provided are changed
    Update {
        /// Customer ID
        #[arg(long)]
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a customer by ID
    Delete {
        /// Customer ID
        #[arg(long)]
        id: u64,
    },
    /// Run the interactive menu
    Menu,

    /// Import customers from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export customers to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
