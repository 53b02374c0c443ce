//! Endpoint for submitting the expense form.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    app_state::SharedExpenseForm,
    expense::{ExpenseFormData, SubmitOutcome, form::expense_form},
};

/// The state needed for submitting the expense form.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    pub expense_form: SharedExpenseForm,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_form: state.expense_form.clone(),
        }
    }
}

/// Validate the expense form and save the expense if it is valid.
///
/// A saved expense redirects the client to the expenses page, which shows the
/// new expense and a blank form. An invalid expense re-renders the form with
/// an error message next to each invalid field.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form_data): Form<ExpenseFormData>,
) -> Response {
    let mut form = match state.expense_form.lock() {
        Ok(form) => form,
        Err(error) => {
            tracing::error!("could not acquire expense form lock: {error}");
            return Error::FormStateLockError.into_alert_response();
        }
    };

    for (field, value) in form_data.into_changes() {
        form.on_field_change(field, value);
    }

    match form.on_submit() {
        Ok(SubmitOutcome::Submitted) => (
            HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(SubmitOutcome::Rejected) => expense_form(form.draft(), form.errors()).into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating an expense: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Form,
        extract::State,
        http::{StatusCode, header::CONTENT_TYPE},
    };
    use rusqlite::Connection;
    use time::OffsetDateTime;

    use crate::{
        AppState, endpoints,
        expense::{Category, ExpenseField, ExpenseFormData, get_all_expenses},
        test_utils::{
            assert_field_error, assert_hx_redirect, assert_valid_html, get_header, must_get_form,
            must_select, parse_html_fragment,
        },
    };

    use super::{CreateExpenseState, create_expense_endpoint};

    fn get_test_state() -> (CreateExpenseState, AppState) {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, "Etc/UTC").unwrap();
        (
            CreateExpenseState {
                expense_form: state.expense_form.clone(),
            },
            state,
        )
    }

    fn form_data(description: &str, amount: &str, category: &str, date: &str) -> ExpenseFormData {
        ExpenseFormData {
            description: Some(description.to_owned()),
            amount: Some(amount.to_owned()),
            category: Some(category.to_owned()),
            date: Some(date.to_owned()),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let (state, app_state) = get_test_state();
        let form = form_data("Coffee", "4.50", "Food", "2024-01-15");

        let response = create_expense_endpoint(State(state), Form(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::EXPENSES_VIEW);

        let expenses = get_all_expenses(&app_state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].description, "Coffee");
        assert_eq!(expenses[0].amount, 4.5);
        assert_eq!(expenses[0].category, Category::Food);
        assert_eq!(expenses[0].date, "2024-01-15");

        let controller = app_state.expense_form.lock().unwrap();
        assert!(controller.draft().description.is_empty());
        assert_eq!(
            controller.draft().date,
            OffsetDateTime::now_utc().date().to_string()
        );
    }

    #[tokio::test]
    async fn invalid_expense_rerenders_form_with_errors() {
        let (state, app_state) = get_test_state();
        let form = form_data("", "-3", "", "");

        let response = create_expense_endpoint(State(state), Form(form)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            get_header(&response, CONTENT_TYPE.as_str()),
            "text/html; charset=utf-8"
        );
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);

        assert_field_error(&form, ExpenseField::Description, "Description is required");
        assert_field_error(
            &form,
            ExpenseField::Amount,
            "Amount must be a number greater than zero",
        );
        assert_field_error(&form, ExpenseField::Category, "Please choose a category");
        assert_field_error(&form, ExpenseField::Date, "Date is required");

        let expenses = get_all_expenses(&app_state.db_connection.lock().unwrap()).unwrap();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn invalid_amount_keeps_other_values() {
        let (state, app_state) = get_test_state();
        let form = form_data("Bus", "abc", "Transportation", "2024-02-01");

        let response = create_expense_endpoint(State(state), Form(form)).await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        let description = must_select(&form, "input[name=description]");
        assert_eq!(description.value().attr("value"), Some("Bus"));

        let controller = app_state.expense_form.lock().unwrap();
        assert_eq!(controller.draft().amount, "abc");
        assert_eq!(controller.draft().category, "Transportation");
        assert_eq!(controller.errors().iter().count(), 1);
    }

    #[tokio::test]
    async fn lock_failure_returns_error_alert() {
        let (state, _app_state) = get_test_state();
        let expense_form = state.expense_form.clone();
        let _ = std::thread::spawn(move || {
            let _guard = expense_form.lock().unwrap();
            panic!("poison the expense form lock");
        })
        .join();

        let response =
            create_expense_endpoint(State(state), Form(form_data("a", "1", "Food", "x"))).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
