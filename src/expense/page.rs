//! Defines the route handler for the page listing expenses next to the expense form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    app_state::SharedExpenseForm,
    expense::{
        Expense, ExpenseDraft, FieldErrors, card::expense_card, form::expense_form,
        get_all_expenses,
    },
    header::header_banner,
    html::{FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
};

fn expenses_view(expenses: &[Expense], draft: &ExpenseDraft, errors: &FieldErrors) -> Markup {
    let content = html! {
        (header_banner(expenses))

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl grid grid-cols-1 lg:grid-cols-3 gap-8"
            {
                div class=(FORM_CONTAINER_STYLE)
                {
                    (expense_form(draft, errors))
                }

                section id="expense-list" class="lg:col-span-2 w-full"
                {
                    h2 class="text-xl font-bold mb-4" { "Expenses" }

                    @if expenses.is_empty() {
                        p id="no-expenses" class="text-gray-600 dark:text-gray-400"
                        {
                            "No expenses yet. Add one using the form."
                        }
                    } @else {
                        div class="grid grid-cols-1 sm:grid-cols-2 gap-4"
                        {
                            @for expense in expenses {
                                (expense_card(expense))
                            }
                        }
                    }
                }
            }
        }
    };

    base("Expenses", &[dollar_input_styles()], &content)
}

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The database connection for listing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The current draft and errors of the expense form.
    pub expense_form: SharedExpenseForm,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            expense_form: state.expense_form.clone(),
        }
    }
}

/// Renders the page with the header banner, the expense form and a card for each expense.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    let form = state
        .expense_form
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense form lock: {error}"))
        .map_err(|_| Error::FormStateLockError)?;

    let expenses = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_all_expenses(&connection)
            .inspect_err(|error| tracing::error!("Failed to retrieve expenses: {error}"))?
    };

    Ok(expenses_view(&expenses, form.draft(), form.errors()).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        AppState,
        expense::{Category, ExpenseField, NewExpense, create_expense},
        test_utils::{
            assert_content_type, assert_status_ok, assert_valid_html, must_get_form, must_select,
            parse_html_document,
        },
    };

    use super::{ExpensesPageState, get_expenses_page};

    fn get_test_state() -> ExpensesPageState {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection, "Etc/UTC").unwrap();
        ExpensesPageState {
            db_connection: state.db_connection,
            expense_form: state.expense_form,
        }
    }

    #[tokio::test]
    async fn empty_page_shows_form_and_empty_state() {
        let state = get_test_state();

        let response = get_expenses_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        must_get_form(&html);
        must_select(&html.root_element(), "header");
        must_select(&html.root_element(), "#no-expenses");
    }

    #[tokio::test]
    async fn shows_a_card_per_expense() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            for description in ["Coffee", "Bus"] {
                create_expense(
                    NewExpense {
                        description: description.to_owned(),
                        amount: 3.0,
                        category: Category::Other,
                        date: "2024-01-15".to_owned(),
                    },
                    &connection,
                )
                .unwrap();
            }
        }

        let response = get_expenses_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        let cards = html.select(&Selector::parse("article").unwrap()).count();
        assert_eq!(cards, 2, "want 2 expense cards, got {cards}");
        assert!(
            html.select(&Selector::parse("#no-expenses").unwrap())
                .next()
                .is_none(),
            "want no empty state message"
        );
    }

    #[tokio::test]
    async fn keeps_draft_between_page_loads() {
        let state = get_test_state();
        state
            .expense_form
            .lock()
            .unwrap()
            .on_field_change(ExpenseField::Description, "Half typed".to_owned());

        let response = get_expenses_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        let form = must_get_form(&html);
        let description = must_select(&form, "input[name=description]");
        assert_eq!(description.value().attr("value"), Some("Half typed"));
    }
}
