//! Holds the state of the expense form between requests.

use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    Error,
    expense::{ExpenseDraft, ExpenseField, FieldErrors, NewExpense, validate},
    timezone::get_offset_at,
};

/// Somewhere to send expenses once they pass validation.
pub trait ExpenseSink {
    /// Accept a validated expense.
    ///
    /// # Errors
    /// Implementations should return an error if the expense could not be
    /// accepted, e.g. it could not be saved.
    fn submit(&mut self, expense: NewExpense) -> Result<(), Error>;
}

impl ExpenseSink for Vec<NewExpense> {
    fn submit(&mut self, expense: NewExpense) -> Result<(), Error> {
        self.push(expense);
        Ok(())
    }
}

/// What happened when the expense form was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was valid and has been handed to the sink.
    Submitted,
    /// The draft was invalid, see [FormController::errors].
    Rejected,
}

/// The draft and errors for one expense form.
///
/// Field edits go through [FormController::on_field_change], which clears any
/// stale error for that field. Only [FormController::on_submit] validates.
#[derive(Debug)]
pub struct FormController<S> {
    draft: ExpenseDraft,
    errors: FieldErrors,
    /// The canonical name of the timezone new drafts are dated in.
    local_timezone: String,
    clock: fn() -> OffsetDateTime,
    sink: S,
}

impl<S: ExpenseSink> FormController<S> {
    /// Create a form with a blank draft dated today in `local_timezone`,
    /// a canonical timezone name such as "Pacific/Auckland".
    pub fn new(local_timezone: &str, sink: S) -> Self {
        let clock = OffsetDateTime::now_utc;

        Self {
            draft: ExpenseDraft::new(today(local_timezone, clock())),
            errors: FieldErrors::new(),
            local_timezone: local_timezone.to_owned(),
            clock,
            sink,
        }
    }

    #[cfg(test)]
    fn set_clock(&mut self, clock: fn() -> OffsetDateTime) {
        self.clock = clock;
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Set `field` to `value` and clear any error for that field.
    pub fn on_field_change(&mut self, field: ExpenseField, value: String) {
        self.draft.set(field, value);

        if self.errors.remove(field).is_some() {
            tracing::debug!("cleared error for edited field {field}");
        }
    }

    /// Validate the draft and, if valid, hand it to the sink.
    ///
    /// An invalid draft is kept as is and its errors replace the current
    /// errors. A valid draft is sent to the sink, after which the errors are
    /// cleared and the draft is reset to a blank draft dated today.
    ///
    /// # Errors
    /// Returns the sink's error if it could not accept the expense. The draft
    /// and errors are left unchanged so the submission can be retried.
    pub fn on_submit(&mut self) -> Result<SubmitOutcome, Error> {
        let expense = match validate(&self.draft) {
            Ok(expense) => expense,
            Err(errors) => {
                let fields: Vec<_> = errors.iter().map(|(field, _)| field.name()).collect();
                tracing::debug!("rejected expense draft, invalid fields: {fields:?}");
                self.errors = errors;
                return Ok(SubmitOutcome::Rejected);
            }
        };

        self.sink.submit(expense)?;

        self.errors = FieldErrors::new();
        self.draft = ExpenseDraft::new(today(&self.local_timezone, (self.clock)()));

        Ok(SubmitOutcome::Submitted)
    }
}

/// The date at `now` in `local_timezone`, using the offset in effect at `now`.
fn today(local_timezone: &str, now: OffsetDateTime) -> Date {
    let offset = get_offset_at(local_timezone, now).unwrap_or_else(|| {
        tracing::error!("Invalid timezone {local_timezone}, dating expense draft in UTC");
        UtcOffset::UTC
    });

    now.to_offset(offset).date()
}
