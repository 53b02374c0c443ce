//! The card that displays a single expense.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    expense::Expense,
    html::{BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, format_currency, format_date},
};

/// Renders a card for `expense` with a button to delete it.
///
/// Deleting swaps the card out for the (empty) response, removing it from the page.
pub fn expense_card(expense: &Expense) -> Markup {
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);
    let card_id = format!("expense-{}", expense.id);

    html! {
        article
            id=(card_id)
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md
                   hover:shadow-lg transition-shadow flex flex-col gap-2"
        {
            div class="flex justify-between items-start gap-4"
            {
                h3 class="text-lg font-semibold break-words" { (expense.description) }

                span class="text-lg font-bold whitespace-nowrap" data-amount
                {
                    (format_currency(expense.amount))
                }
            }

            div class="flex justify-between items-center text-sm text-gray-600 dark:text-gray-400"
            {
                span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
                time datetime=(expense.date) { (format_date(&expense.date)) }
            }

            div class="text-right"
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm={ "Delete the expense \"" (expense.description) "\"?" }
                    hx-target="closest article"
                    hx-target-error="#alert-container"
                    hx-swap="outerHTML"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
