//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    expense::{ExpenseStore, FormController},
    timezone::get_local_offset,
};

/// The expense form shared by every request, saving submitted expenses to the database.
pub type SharedExpenseForm = Arc<Mutex<FormController<ExpenseStore>>>;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The draft and errors of the expense form.
    pub expense_form: SharedExpenseForm,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or if
    /// `local_timezone` is not a valid timezone.
    pub fn new(db_connection: Connection, local_timezone: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;

        if get_local_offset(local_timezone).is_none() {
            tracing::error!("Invalid timezone {local_timezone}");
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        let connection = Arc::new(Mutex::new(db_connection));
        let expense_form =
            FormController::new(local_timezone, ExpenseStore::new(connection.clone()));

        Ok(Self {
            db_connection: connection,
            expense_form: Arc::new(Mutex::new(expense_form)),
        })
    }
}
