use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{info, warn};

use crate::validation::{validate_contact, ContactForm, FormFields, UNREADABLE_FORM};
use crate::views;

pub async fn contact_form() -> Html<String> {
    views::contact_form(&[])
}

/// Nothing is sent anywhere; a valid submission only earns the thank-you page.
/// Rejected submissions are not echoed back, the visitor fills the form again.
pub async fn submit_contact(fields: Result<Form<FormFields>, FormRejection>) -> Response {
    let Ok(Form(fields)) = fields else {
        warn!("unreadable contact submission");
        let errors = [UNREADABLE_FORM.to_string()];
        return (StatusCode::BAD_REQUEST, views::contact_form(&errors)).into_response();
    };

    let errors = validate_contact(&ContactForm::from_fields(&fields));
    if !errors.is_empty() {
        warn!(errors = errors.len(), "rejected contact submission");
        return (StatusCode::BAD_REQUEST, views::contact_form(&errors)).into_response();
    }

    info!("contact form accepted");
    Redirect::to("/thankyou").into_response()
}
