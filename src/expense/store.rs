//! Saves submitted expenses to the database.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    expense::{ExpenseSink, NewExpense, create_expense},
};

/// An [ExpenseSink] that inserts each expense into the `expense` table.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    db_connection: Arc<Mutex<Connection>>,
}

impl ExpenseStore {
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }
}

impl ExpenseSink for ExpenseStore {
    fn submit(&mut self, expense: NewExpense) -> Result<(), Error> {
        let connection = self
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        let expense = create_expense(expense, &connection)
            .inspect_err(|error| tracing::error!("could not create expense: {error}"))?;
        tracing::info!("created expense {}", expense.id);

        Ok(())
    }
}
