//! Recording expenses: the expense form with its validation, the expense cards
//! and the endpoints for adding and deleting expenses.

mod card;
mod controller;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod draft;
mod draft_endpoint;
mod form;
mod page;
mod store;
mod validation;

pub use controller::{ExpenseSink, FormController, SubmitOutcome};
#[cfg(test)]
pub use core::get_expense;
pub use core::{
    Category, Expense, ExpenseId, NewExpense, create_expense, create_expense_table,
    delete_expense, get_all_expenses,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use draft::{ExpenseDraft, ExpenseField, ExpenseFormData, FieldError, FieldErrors};
pub use draft_endpoint::update_draft_endpoint;
pub use page::get_expenses_page;
pub use store::ExpenseStore;
pub use validation::validate;
