//! Defines the core data models and database queries for expenses.

use std::{fmt::Display, str::FromStr};

use rusqlite::{Connection, Row, types::Type};
use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// The kind of thing money was spent on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Food,
    Transportation,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in the order they are offered in the expense form.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Other,
    ];

    /// The display name of the category, which is also its form and database value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string did not match the name of any [Category].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a valid category")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parse a category from its exact display name, e.g. "Food".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// A validated expense that is ready to be stored.
///
/// Produced by [crate::expense::validate] from an
/// [ExpenseDraft](crate::expense::ExpenseDraft).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// What the money was spent on, without leading or trailing whitespace.
    pub description: String,
    /// How much was spent, always greater than zero.
    pub amount: f64,
    /// The kind of thing the money was spent on.
    pub category: Category,
    /// When the money was spent, as entered by the user.
    ///
    /// This is usually an ISO 8601 date such as "2024-01-15", but only
    /// non-emptiness is checked.
    pub date: String,
}

/// An expense that has been stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// How much was spent.
    pub amount: f64,
    /// The kind of thing the money was spent on.
    pub category: Category,
    /// When the money was spent.
    pub date: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new expense in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_expense(expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (description, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, description, amount, category, date",
        )?
        .query_row(
            (
                expense.description,
                expense.amount,
                expense.category.as_str(),
                expense.date,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
#[cfg(test)]
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare("SELECT id, description, amount, category, date FROM expense WHERE id = :id")?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Retrieve all expenses, the most recent first.
///
/// Expenses on the same date are ordered by when they were created, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, category, date FROM expense
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

type RowsAffected = usize;

/// Delete the expense with `id`, returning the number of rows deleted.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an [Expense].
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let category: String = row.get(3)?;
    let category = category.parse().map_err(|error: ParseCategoryError| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error))
    })?;
    let date = row.get(4)?;

    Ok(Expense {
        id,
        description,
        amount,
        category,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod category_tests {
    use super::{Category, ParseCategoryError};

    #[test]
    fn parses_every_display_name() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        for name in ["", "food", "Groceries", " Food"] {
            assert_eq!(
                name.parse::<Category>(),
                Err(ParseCategoryError(name.to_owned())),
                "want {name:?} to be rejected"
            );
        }
    }

    #[test]
    fn defaults_to_food() {
        assert_eq!(Category::default(), Category::Food);
    }
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        expense::{
            Category, Expense, NewExpense, create_expense, delete_expense, get_all_expenses,
            get_expense,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_expense(description: &str, amount: f64, date: &str) -> NewExpense {
        NewExpense {
            description: description.to_owned(),
            amount,
            category: Category::Entertainment,
            date: date.to_owned(),
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();

        let result = create_expense(new_expense("Cinema", 18.5, "2024-03-02"), &conn);

        assert_eq!(
            result,
            Ok(Expense {
                id: 1,
                description: "Cinema".to_owned(),
                amount: 18.5,
                category: Category::Entertainment,
                date: "2024-03-02".to_owned(),
            })
        );
    }

    #[test]
    fn get_returns_created_expense() {
        let conn = get_test_connection();
        let want = create_expense(new_expense("Cinema", 18.5, "2024-03-02"), &conn).unwrap();

        let got = get_expense(want.id, &conn);

        assert_eq!(got, Ok(want));
    }

    #[test]
    fn get_fails_on_missing_id() {
        let conn = get_test_connection();

        let got = get_expense(42, &conn);

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn get_all_orders_newest_first() {
        let conn = get_test_connection();
        let old = create_expense(new_expense("Old", 1.0, "2024-01-01"), &conn).unwrap();
        let new = create_expense(new_expense("New", 2.0, "2024-02-01"), &conn).unwrap();
        let newer_same_day =
            create_expense(new_expense("Same day", 3.0, "2024-02-01"), &conn).unwrap();

        let got = get_all_expenses(&conn).unwrap();

        assert_eq!(got, vec![newer_same_day, new, old]);
    }

    #[test]
    fn get_all_on_empty_table() {
        let conn = get_test_connection();

        let got = get_all_expenses(&conn).unwrap();

        assert!(got.is_empty(), "want no expenses, got {got:?}");
    }

    #[test]
    fn delete_removes_expense() {
        let conn = get_test_connection();
        let expense = create_expense(new_expense("Cinema", 18.5, "2024-03-02"), &conn).unwrap();

        let rows_affected = delete_expense(expense.id, &conn);

        assert_eq!(rows_affected, Ok(1));
        assert_eq!(get_expense(expense.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_expense_affects_no_rows() {
        let conn = get_test_connection();

        let rows_affected = delete_expense(7, &conn);

        assert_eq!(rows_affected, Ok(0));
    }

    #[test]
    fn map_row_rejects_unknown_category() {
        let conn = get_test_connection();
        conn.execute(
            "INSERT INTO expense (description, amount, category, date)
             VALUES ('Mystery', 1.0, 'Groceries', '2024-01-01')",
            (),
        )
        .unwrap();

        let got = get_expense(1, &conn);

        assert!(
            matches!(got, Err(Error::SqlError(_))),
            "want SQL conversion error, got {got:?}"
        );
    }
}
