//! In-memory ledger store.
//!
//! Single process-wide collection of customers, shared by all request
//! handlers through [`crate::startup::AppState`]. Mutations hold the write
//! lock for their whole critical section, so a withdraw's funds check and its
//! append cannot interleave with another mutation on the same store.

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::{Customer, StatementEntry, TransactionKind};

/// Sum a statement into a signed balance: deposits add, withdrawals subtract.
pub fn balance_of(statement: &[StatementEntry]) -> f64 {
    statement
        .iter()
        .fold(0.0, |acc, entry| acc + entry.signed_value())
}

/// Ordered collection of customer records, lookup keyed by the external
/// identifier. Linear scan is fine at this scale; the store never persists.
pub struct LedgerStore {
    customers: RwLock<Vec<Customer>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(Vec::new()),
        }
    }

    /// Create a customer with an empty statement.
    pub async fn create(&self, identifier: String, name: String) -> Result<(), AppError> {
        let mut customers = self.customers.write().await;

        if customers.iter().any(|c| c.identifier == identifier) {
            return Err(AppError::DuplicateCustomer);
        }

        let customer = Customer::new(identifier, name);
        tracing::info!(customer_id = %customer.id, "Customer created");
        customers.push(customer);

        Ok(())
    }

    /// Check that an identifier resolves to a customer, without cloning the
    /// record. Operations resolve the customer before any input validation.
    pub async fn resolve(&self, identifier: &str) -> Result<(), AppError> {
        let customers = self.customers.read().await;
        if customers.iter().any(|c| c.identifier == identifier) {
            Ok(())
        } else {
            Err(AppError::CustomerNotFound)
        }
    }

    /// Resolve a customer by external identifier, returning a snapshot.
    pub async fn get(&self, identifier: &str) -> Result<Customer, AppError> {
        let customers = self.customers.read().await;
        customers
            .iter()
            .find(|c| c.identifier == identifier)
            .cloned()
            .ok_or(AppError::CustomerNotFound)
    }

    /// Replace a customer's display name in place.
    pub async fn rename(&self, identifier: &str, name: String) -> Result<(), AppError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.identifier == identifier)
            .ok_or(AppError::CustomerNotFound)?;

        customer.name = name;
        Ok(())
    }

    /// Remove a customer and its whole statement from the store.
    pub async fn remove(&self, identifier: &str) -> Result<(), AppError> {
        let mut customers = self.customers.write().await;
        let index = customers
            .iter()
            .position(|c| c.identifier == identifier)
            .ok_or(AppError::CustomerNotFound)?;

        let customer = customers.remove(index);
        tracing::info!(customer_id = %customer.id, "Customer deleted");
        Ok(())
    }

    /// Append a deposit entry. No upper bound on the amount.
    pub async fn deposit(
        &self,
        identifier: &str,
        value: f64,
        description: Option<String>,
    ) -> Result<(), AppError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.identifier == identifier)
            .ok_or(AppError::CustomerNotFound)?;

        customer
            .statement
            .push(StatementEntry::new(TransactionKind::Deposit, value, description));

        tracing::debug!(customer_id = %customer.id, value, "Deposit posted");
        Ok(())
    }

    /// Append a withdraw entry if the running balance covers it.
    pub async fn withdraw(
        &self,
        identifier: &str,
        value: f64,
        description: Option<String>,
    ) -> Result<(), AppError> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.identifier == identifier)
            .ok_or(AppError::CustomerNotFound)?;

        let balance = balance_of(&customer.statement);
        if balance - value < 0.0 {
            tracing::debug!(customer_id = %customer.id, balance, value, "Withdrawal rejected");
            return Err(AppError::InsufficientFunds);
        }

        customer
            .statement
            .push(StatementEntry::new(TransactionKind::Withdraw, value, description));

        tracing::debug!(customer_id = %customer.id, value, "Withdrawal posted");
        Ok(())
    }

    /// Full statement in append order.
    pub async fn statement(&self, identifier: &str) -> Result<Vec<StatementEntry>, AppError> {
        let customer = self.get(identifier).await?;
        Ok(customer.statement)
    }

    /// Entries created on the given UTC calendar date; time of day is
    /// ignored. Zero matches is an empty vec, not an error.
    pub async fn statement_on(
        &self,
        identifier: &str,
        date: chrono::NaiveDate,
    ) -> Result<Vec<StatementEntry>, AppError> {
        let customer = self.get(identifier).await?;
        Ok(customer
            .statement
            .into_iter()
            .filter(|entry| entry.created_on() == date)
            .collect())
    }

    /// Balance recomputed from scratch over the full statement.
    pub async fn balance(&self, identifier: &str) -> Result<f64, AppError> {
        let customer = self.get(identifier).await?;
        Ok(balance_of(&customer.statement))
    }

    /// Number of customers currently in the store.
    pub async fn customer_count(&self) -> usize {
        self.customers.read().await.len()
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
