use super::*;

use tracing::{debug, info, warn};

/// Owns the customer collection and keeps it in step with its store.
///
/// Every mutation is applied in memory first and then the whole collection is saved.
/// If the save fails the mutation stays in memory and the error is returned, so the
/// caller learns that memory and disk have diverged.
pub struct CustomerManager {
    mem: Vec<Customer>,
    storage: Box<dyn CustomerStore>,
}

impl CustomerManager {
    pub fn new(storage: Box<dyn CustomerStore>) -> Result<Self, AppError> {
        let mem = storage.load()?;
        debug!(
            medium = storage.get_medium(),
            count = mem.len(),
            "customer manager ready"
        );

        Ok(Self { mem, storage })
    }

    pub fn list(&self) -> &[Customer] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Customer, AppError> {
        self.mem
            .iter()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound(id))
    }

    /// Appends a new customer numbered after the current collection size.
    ///
    /// The number is positional, so after a delete it can repeat an id still held by
    /// another customer.
    pub fn add(&mut self, name: String, email: String, phone: String) -> Result<Customer, AppError> {
        let customer = Customer::new(self.next_id(), name, email, phone);
        self.mem.push(customer.clone());

        self.save()?;
        info!(id = customer.id, "customer added");
        Ok(customer)
    }

    pub fn update(&mut self, id: u64, patch: CustomerPatch) -> Result<Customer, AppError> {
        let customer = self
            .mem
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound(id))?;

        let changed = customer.apply(patch);
        let updated = customer.clone();

        self.save()?;
        info!(id, changed, "customer updated");
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<Customer, AppError> {
        let index = self
            .mem
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound(id))?;

        let removed = self.mem.remove(index);

        self.save()?;
        info!(id, "customer deleted");
        Ok(removed)
    }

    /// Adds every entry the way `add` would, then saves once.
    pub fn import(
        &mut self,
        entries: impl IntoIterator<Item = NewCustomer>,
    ) -> Result<usize, AppError> {
        let before = self.mem.len();

        for entry in entries {
            let customer = Customer::new(self.next_id(), entry.name, entry.email, entry.phone);
            self.mem.push(customer);
        }

        let total = self.mem.len() - before;
        self.save()?;
        info!(total, "customers imported");
        Ok(total)
    }

    fn next_id(&self) -> u64 {
        self.mem.len() as u64 + 1
    }

    fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem).inspect_err(|e| {
            warn!(
                medium = self.storage.get_medium(),
                error = %e,
                "save failed, in-memory customers differ from storage"
            )
        })
    }
}
