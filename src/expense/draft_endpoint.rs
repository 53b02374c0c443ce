//! Endpoint for saving edits to the expense form as the user types.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    app_state::SharedExpenseForm,
    expense::{ExpenseFormData, form::field_error_slot},
};

/// The state needed for editing the expense form.
#[derive(Debug, Clone)]
pub struct UpdateDraftState {
    pub expense_form: SharedExpenseForm,
}

impl FromRef<AppState> for UpdateDraftState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_form: state.expense_form.clone(),
        }
    }
}

/// Apply the edited fields to the draft and return their (now empty) error slots.
///
/// Edits are never validated here, the only effect on the errors is that an
/// edited field's error is cleared.
pub async fn update_draft_endpoint(
    State(state): State<UpdateDraftState>,
    Form(form_data): Form<ExpenseFormData>,
) -> Response {
    let changes = form_data.into_changes();

    if changes.is_empty() {
        return Alert::error(
            "Could not update expense form",
            "The request did not include any expense fields.",
        )
        .into_response_with_status(StatusCode::BAD_REQUEST);
    }

    let mut form = match state.expense_form.lock() {
        Ok(form) => form,
        Err(error) => {
            tracing::error!("could not acquire expense form lock: {error}");
            return Error::FormStateLockError.into_alert_response();
        }
    };

    let fields: Vec<_> = changes.iter().map(|(field, _)| *field).collect();

    for (field, value) in changes {
        form.on_field_change(field, value);
    }

    html! {
        @for field in fields {
            (field_error_slot(field, form.errors()))
        }
    }
    .into_response()
}
