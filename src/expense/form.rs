use maud::{Markup, html};

use crate::{
    endpoints,
    expense::{Category, ExpenseDraft, ExpenseField, FieldErrors},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        loading_spinner,
    },
};

/// The ID of the element that holds the error message for `field`.
pub fn error_slot_id(field: ExpenseField) -> String {
    format!("{}-error", field.name())
}

/// The element that holds the error message for `field`, empty if the field has no error.
///
/// The slot is always rendered so that field edits have something to swap.
pub fn field_error_slot(field: ExpenseField, errors: &FieldErrors) -> Markup {
    html! {
        p id=(error_slot_id(field)) class=(FORM_ERROR_STYLE) aria-live="polite"
        {
            @if let Some(message) = errors.message(field) {
                (message)
            }
        }
    }
}

/// The selector for the error slot replaced when `field` changes.
fn field_change_target(field: ExpenseField) -> String {
    format!("#{}", error_slot_id(field))
}

/// Renders the expense form filled in with `draft` and showing `errors`.
pub fn expense_form(draft: &ExpenseDraft, errors: &FieldErrors) -> Markup {
    let spinner = loading_spinner();
    let selected_category = draft.get(ExpenseField::Category);

    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            novalidate
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "New Expense" }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    (ExpenseField::Description.label())
                }

                input
                    name=(ExpenseField::Description.name())
                    id="description"
                    type="text"
                    placeholder="What did you spend money on?"
                    value=(draft.get(ExpenseField::Description))
                    autofocus
                    aria-invalid=[errors.get(ExpenseField::Description).map(|_| "true")]
                    hx-put=(endpoints::EXPENSE_DRAFT)
                    hx-trigger="change"
                    hx-params=(ExpenseField::Description.name())
                    hx-target=(field_change_target(ExpenseField::Description))
                    hx-swap="outerHTML"
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error_slot(ExpenseField::Description, errors))
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    (ExpenseField::Amount.label())
                }

                div class="input-wrapper w-full"
                {
                    input
                        name=(ExpenseField::Amount.name())
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        value=(draft.get(ExpenseField::Amount))
                        aria-invalid=[errors.get(ExpenseField::Amount).map(|_| "true")]
                        hx-put=(endpoints::EXPENSE_DRAFT)
                        hx-trigger="change"
                        hx-params=(ExpenseField::Amount.name())
                        hx-target=(field_change_target(ExpenseField::Amount))
                        hx-swap="outerHTML"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (field_error_slot(ExpenseField::Amount, errors))
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    (ExpenseField::Category.label())
                }

                select
                    name=(ExpenseField::Category.name())
                    id="category"
                    aria-invalid=[errors.get(ExpenseField::Category).map(|_| "true")]
                    hx-put=(endpoints::EXPENSE_DRAFT)
                    hx-trigger="change"
                    hx-params=(ExpenseField::Category.name())
                    hx-target=(field_change_target(ExpenseField::Category))
                    hx-swap="outerHTML"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_category.is_empty()] { "Select a category" }

                    @for category in Category::ALL {
                        option
                            value=(category.as_str())
                            selected[selected_category == category.as_str()]
                        {
                            (category.as_str())
                        }
                    }
                }

                (field_error_slot(ExpenseField::Category, errors))
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    (ExpenseField::Date.label())
                }

                input
                    name=(ExpenseField::Date.name())
                    id="date"
                    type="date"
                    value=(draft.get(ExpenseField::Date))
                    aria-invalid=[errors.get(ExpenseField::Date).map(|_| "true")]
                    hx-put=(endpoints::EXPENSE_DRAFT)
                    hx-trigger="change"
                    hx-params=(ExpenseField::Date.name())
                    hx-target=(field_change_target(ExpenseField::Date))
                    hx-swap="outerHTML"
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error_slot(ExpenseField::Date, errors))
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Add Expense"
            }
        }
    }
}
