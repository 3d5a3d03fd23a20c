use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{info, warn};

use super::store::*;
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{validate_new_project, FormFields, NewProjectForm, UNREADABLE_FORM};
use crate::views;

pub async fn list_projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let projects = state.store.list_all().await?;
    Ok(views::projects(&projects))
}

pub async fn new_project_form() -> Html<String> {
    views::new_project_form(&[])
}

/// Validate the submission, store it, then send the visitor back to the listing.
pub async fn create_project(
    State(state): State<AppState>,
    fields: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, AppError> {
    let Ok(Form(fields)) = fields else {
        warn!("unreadable new project submission");
        let errors = [UNREADABLE_FORM.to_string()];
        return Ok((StatusCode::BAD_REQUEST, views::new_project_form(&errors)).into_response());
    };

    let form = NewProjectForm::from_fields(&fields);
    let errors = validate_new_project(&form);
    if !errors.is_empty() {
        warn!(errors = errors.len(), "rejected new project submission");
        return Ok((StatusCode::BAD_REQUEST, views::new_project_form(&errors)).into_response());
    }

    let input = NewProject::new(
        form.title.trim(),
        form.description.trim(),
        form.image_file_name.trim(),
    );
    info!(title = %input.title, "adding project");
    state.store.add(input).await?;

    Ok(Redirect::to("/projects").into_response())
}
