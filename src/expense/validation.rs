//! Validation for expense drafts.

use crate::expense::{Category, ExpenseDraft, ExpenseField, FieldError, FieldErrors, NewExpense};

/// Check every field of `draft` and convert it into a [NewExpense].
///
/// All fields are checked, so the returned [FieldErrors] holds one entry for
/// every field that failed, not just the first:
/// - description must not be empty once trimmed,
/// - amount must parse as a finite number greater than zero,
/// - category must be the exact name of a [Category],
/// - date must not be empty. The calendar date itself is not checked.
///
/// The amount is parsed as a standard decimal floating point number after
/// removing surrounding whitespace. A leading sign, a decimal point and
/// exponent notation (e.g. "1.5e2") are accepted. Currency symbols, grouping
/// separators, "inf" and "NaN" are not.
///
/// # Errors
/// Returns the errors for each failed field if any field is invalid.
pub fn validate(draft: &ExpenseDraft) -> Result<NewExpense, FieldErrors> {
    let mut errors = FieldErrors::new();

    let description = draft.description.trim();
    if description.is_empty() {
        errors.insert(ExpenseField::Description, FieldError::Required);
    }

    let amount = parse_amount(&draft.amount);
    if amount.is_none() {
        errors.insert(ExpenseField::Amount, FieldError::InvalidAmount);
    }

    let category = draft.category.parse::<Category>().ok();
    if category.is_none() {
        errors.insert(ExpenseField::Category, FieldError::Required);
    }

    if draft.date.is_empty() {
        errors.insert(ExpenseField::Date, FieldError::Required);
    }

    match (amount, category) {
        (Some(amount), Some(category)) if errors.is_empty() => Ok(NewExpense {
            description: description.to_owned(),
            amount,
            category,
            date: draft.date.clone(),
        }),
        _ => Err(errors),
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
