//! Application router configuration.

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expenses_page,
        update_draft_endpoint,
    },
    internal_server_error::InternalServerError,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Static files are served outside the logging middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::EXPENSE_DRAFT, put(update_draft_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .with_state(state)
}

async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}
