//! The unvalidated expense held by the expense form and its per-field errors.

use std::{collections::BTreeMap, fmt::Display};

use serde::Deserialize;
use time::Date;

use crate::expense::Category;

/// Identifies one of the fields of the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpenseField {
    Description,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    /// Every field, in the order they appear in the expense form.
    pub const ALL: [ExpenseField; 4] = [
        ExpenseField::Description,
        ExpenseField::Amount,
        ExpenseField::Category,
        ExpenseField::Date,
    ];

    /// The name used for the field's input element and form data.
    pub fn name(&self) -> &'static str {
        match self {
            ExpenseField::Description => "description",
            ExpenseField::Amount => "amount",
            ExpenseField::Category => "category",
            ExpenseField::Date => "date",
        }
    }

    /// The human readable label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseField::Description => "Description",
            ExpenseField::Amount => "Amount",
            ExpenseField::Category => "Category",
            ExpenseField::Date => "Date",
        }
    }
}

impl Display for ExpenseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An expense as typed into the form, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    /// The amount as text, parsed only on submit.
    pub amount: String,
    /// The category name, e.g. "Food".
    pub category: String,
    /// The date as text, e.g. "2024-01-15".
    pub date: String,
}

impl ExpenseDraft {
    /// A blank draft dated `today` with the default category.
    pub fn new(today: Date) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: Category::default().to_string(),
            date: today.to_string(),
        }
    }

    /// The current text of `field`.
    pub fn get(&self, field: ExpenseField) -> &str {
        match field {
            ExpenseField::Description => &self.description,
            ExpenseField::Amount => &self.amount,
            ExpenseField::Category => &self.category,
            ExpenseField::Date => &self.date,
        }
    }

    /// Replace the text of `field` with `value`.
    pub fn set(&mut self, field: ExpenseField, value: String) {
        match field {
            ExpenseField::Description => self.description = value,
            ExpenseField::Amount => self.amount = value,
            ExpenseField::Category => self.category = value,
            ExpenseField::Date => self.date = value,
        }
    }
}

/// Form data for the expense form.
///
/// Field edits only send the field that changed, so every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseFormData {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl ExpenseFormData {
    /// The fields that were sent along with their values, in form order.
    pub fn into_changes(self) -> Vec<(ExpenseField, String)> {
        [
            (ExpenseField::Description, self.description),
            (ExpenseField::Amount, self.amount),
            (ExpenseField::Category, self.category),
            (ExpenseField::Date, self.date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field was empty, or held a value that is not one of its options.
    #[error("required")]
    Required,
    /// The amount was not a number, or was not greater than zero.
    #[error("invalid amount")]
    InvalidAmount,
}

impl FieldError {
    /// The message to show next to `field` in the expense form.
    pub fn message(&self, field: ExpenseField) -> String {
        match (self, field) {
            (FieldError::Required, ExpenseField::Category) => {
                "Please choose a category".to_owned()
            }
            (FieldError::Required, field) => format!("{} is required", field.label()),
            (FieldError::InvalidAmount, _) => "Amount must be a number greater than zero".to_owned(),
        }
    }
}

/// The validation errors for an expense draft, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ExpenseField, FieldError>);

impl FieldErrors {
    /// An error map with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` for `field`, replacing any previous error for it.
    pub fn insert(&mut self, field: ExpenseField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Remove the error for `field`, if any.
    pub fn remove(&mut self, field: ExpenseField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: ExpenseField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// The message to display for `field`, or `None` if the field has no error.
    pub fn message(&self, field: ExpenseField) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl FromIterator<(ExpenseField, FieldError)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (ExpenseField, FieldError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
