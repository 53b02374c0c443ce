use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The first element under `scope` matching `selector`.
#[track_caller]
pub(crate) fn must_select<'a>(scope: &ElementRef<'a>, selector: &str) -> ElementRef<'a> {
    scope
        .select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No element matching {selector}"))
}

/// The text content of the first element under `scope` matching `selector`.
#[track_caller]
pub(crate) fn text_of(scope: &ElementRef<'_>, selector: &str) -> String {
    must_select(scope, selector).text().collect()
}
