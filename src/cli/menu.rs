use std::io::{self, BufRead, Write};

use crate::cli::{display_customers, update_message};
use crate::domain::{CustomerManager, CustomerPatch};
use crate::errors::AppError;

pub enum MenuCommand {
    AddCustomer,
    ViewCustomers,
    UpdateCustomer,
    DeleteCustomer,
    Exit,
}

impl MenuCommand {
    pub fn parse(choice: &str) -> Result<Self, AppError> {
        match choice {
            "1" => Ok(MenuCommand::AddCustomer),
            "2" => Ok(MenuCommand::ViewCustomers),
            "3" => Ok(MenuCommand::UpdateCustomer),
            "4" => Ok(MenuCommand::DeleteCustomer),
            "5" => Ok(MenuCommand::Exit),
            _ => Err(AppError::Validation(format!("unknown menu choice '{choice}'"))),
        }
    }
}

/// Interactive loop over `input` and `output`.
///
/// Errors from the manager and unparsable input are printed and the loop carries on.
/// Lines that are not valid UTF-8 are read lossily, so they show up as an invalid
/// choice or value instead of an error. Only a failure to read from or write to the
/// terminal itself ends the loop with an error. End of input is treated as choosing
/// Exit.
pub struct Menu<'a, R, W> {
    manager: &'a mut CustomerManager,
    input: R,
    output: W,
}

enum Outcome {
    Continue,
    EndOfInput,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(manager: &'a mut CustomerManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.get_input()? else {
                writeln!(self.output, "\nExiting CRM system.")?;
                return Ok(());
            };

            let command = match MenuCommand::parse(choice.trim()) {
                Ok(command) => command,
                Err(_) => {
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    continue;
                }
            };

            let outcome = match command {
                MenuCommand::AddCustomer => self.add_customer()?,
                MenuCommand::ViewCustomers => self.view_customers()?,
                MenuCommand::UpdateCustomer => self.update_customer()?,
                MenuCommand::DeleteCustomer => self.delete_customer()?,
                MenuCommand::Exit => {
                    writeln!(self.output, "Exiting CRM system.")?;
                    return Ok(());
                }
            };

            if let Outcome::EndOfInput = outcome {
                writeln!(self.output, "\nExiting CRM system.")?;
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nCRM System:")?;
        writeln!(self.output, "1. Add Customer")?;
        writeln!(self.output, "2. View Customers")?;
        writeln!(self.output, "3. Update Customer")?;
        writeln!(self.output, "4. Delete Customer")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn add_customer(&mut self) -> io::Result<Outcome> {
        let Some(name) = self.prompt("Enter customer name: ")? else {
            return Ok(Outcome::EndOfInput);
        };
        let Some(email) = self.prompt("Enter customer email: ")? else {
            return Ok(Outcome::EndOfInput);
        };
        let Some(phone) = self.prompt("Enter customer phone: ")? else {
            return Ok(Outcome::EndOfInput);
        };

        let result = self.manager.add(name, email, phone).map(|customer| {
            format!(
                "Customer {} added successfully with ID {}.",
                customer.name, customer.id
            )
        });
        self.report(result)
    }

    fn view_customers(&mut self) -> io::Result<Outcome> {
        writeln!(self.output, "{}", display_customers(self.manager.list()))?;
        Ok(Outcome::Continue)
    }

    fn update_customer(&mut self) -> io::Result<Outcome> {
        let Some(id) = self.prompt("Enter customer ID to update: ")? else {
            return Ok(Outcome::EndOfInput);
        };
        let id: u64 = match id.trim().parse() {
            Ok(id) => id,
            Err(e) => return self.report(Err(AppError::from(e))),
        };

        let Some(name) = self.prompt("Enter new name (leave blank to keep current): ")? else {
            return Ok(Outcome::EndOfInput);
        };
        let Some(email) = self.prompt("Enter new email (leave blank to keep current): ")? else {
            return Ok(Outcome::EndOfInput);
        };
        let Some(phone) = self.prompt("Enter new phone (leave blank to keep current): ")? else {
            return Ok(Outcome::EndOfInput);
        };

        let patch = CustomerPatch {
            name: non_blank(name),
            email: non_blank(email),
            phone: non_blank(phone),
        };

        let result = self
            .manager
            .update(id, patch.clone())
            .map(|_| update_message(id, &patch));
        self.report(result)
    }

    fn delete_customer(&mut self) -> io::Result<Outcome> {
        let Some(id) = self.prompt("Enter customer ID to delete: ")? else {
            return Ok(Outcome::EndOfInput);
        };
        let id: u64 = match id.trim().parse() {
            Ok(id) => id,
            Err(e) => return self.report(Err(AppError::from(e))),
        };

        let result = self
            .manager
            .delete(id)
            .map(|_| format!("Customer {id} deleted successfully."));
        self.report(result)
    }

    /// Prints the success message or the error, then returns to the menu.
    fn report(&mut self, result: Result<String, AppError>) -> io::Result<Outcome> {
        match result {
            Ok(message) => writeln!(self.output, "{message}")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Outcome::Continue)
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.get_input()
    }

    /// Next line without its line ending, or `None` at end of input.
    fn get_input(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
