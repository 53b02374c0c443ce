use scraper::{ElementRef, Html, Selector};

use crate::expense::ExpenseField;

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(element: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, endpoint,
        "want element with attribute {attribute}=\"{endpoint}\", got {got:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

/// Assert that the error slot for `field` shows `want`, an empty string meaning no error.
#[track_caller]
pub(crate) fn assert_field_error(form: &ElementRef<'_>, field: ExpenseField, want: &str) {
    let selector = format!("p#{}-error", field.name());
    let slot = form
        .select(&Selector::parse(&selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No error slot for {field}"));
    let got = slot.text().collect::<String>();

    assert_eq!(got.trim(), want, "wrong error message for {field}");
}
