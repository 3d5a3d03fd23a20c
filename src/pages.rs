//! Static pages with no data dependency.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::views;

pub async fn index() -> Html<String> {
    views::home()
}

pub async fn about() -> Html<String> {
    views::about()
}

pub async fn resume() -> Html<String> {
    views::resume()
}

pub async fn thank_you() -> Html<String> {
    views::thank_you()
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, views::not_found())
}
