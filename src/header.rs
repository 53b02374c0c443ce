//! The banner shown at the top of the expenses page.

use maud::{Markup, html};

use crate::{endpoints, expense::Expense, html::format_currency};

/// Render the header banner with the number of expenses and the total spent.
pub fn header_banner(expenses: &[Expense]) -> Markup {
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let count_text = match expenses.len() {
        1 => "1 expense".to_owned(),
        count => format!("{count} expenses"),
    };

    html! {
        header class="w-full bg-blue-600 dark:bg-blue-800 text-white shadow"
        {
            div
                class="max-w-screen-xl mx-auto px-6 py-6 flex flex-wrap items-end justify-between gap-4"
            {
                div
                {
                    a href=(endpoints::EXPENSES_VIEW) class="text-3xl font-bold tracking-tight"
                    {
                        "Expense Tracker"
                    }

                    p class="text-blue-100" { "Keep track of where your money goes." }
                }

                div class="text-right"
                {
                    p id="expense-total" class="text-2xl font-semibold" { (format_currency(total)) }
                    p id="expense-count" class="text-sm text-blue-100" { (count_text) }
                }
            }
        }
    }
}
