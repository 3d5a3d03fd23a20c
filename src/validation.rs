//! Server-side form checks.
//!
//! Both validators are pure and total: every input maps to a (possibly empty)
//! list of human-readable messages, in rule order. An empty list means valid.

pub const MIN_PASSWORD_LEN: usize = 8;

/// Shown when a submission body cannot be decoded as a form at all.
pub const UNREADABLE_FORM: &str = "The form submission could not be read. Please try again.";

/// Decoded `application/x-www-form-urlencoded` body, in submission order.
pub type FormFields = Vec<(String, String)>;

/// First submitted value for `name`, or an empty string when absent.
fn first_value(fields: &[(String, String)], name: &str) -> String {
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

/// Raw contact form submission.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl ContactForm {
    /// Missing fields are empty, repeated fields keep their first value.
    pub fn from_fields(fields: &[(String, String)]) -> Self {
        Self {
            first_name: first_value(fields, "first_name"),
            last_name: first_value(fields, "last_name"),
            email: first_value(fields, "email"),
            password: first_value(fields, "password"),
            confirm_password: first_value(fields, "confirm_password"),
        }
    }
}

/// Raw new-project form submission.
#[derive(Debug, Clone, Default)]
pub struct NewProjectForm {
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}

impl NewProjectForm {
    pub fn from_fields(fields: &[(String, String)]) -> Self {
        Self {
            title: first_value(fields, "title"),
            description: first_value(fields, "description"),
            image_file_name: first_value(fields, "image_file_name"),
        }
    }
}

pub fn validate_contact(form: &ContactForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.first_name.trim().is_empty() {
        errors.push("First name is required.".to_string());
    }
    if form.last_name.trim().is_empty() {
        errors.push("Last name is required.".to_string());
    }
    if form.email.trim().is_empty() {
        errors.push("Email is required.".to_string());
    }
    // Passwords are compared untrimmed; length counts characters, not bytes.
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        ));
    }
    if form.password != form.confirm_password {
        errors.push("Passwords do not match.".to_string());
    }

    errors
}

pub fn validate_new_project(form: &NewProjectForm) -> Vec<String> {
    if form.title.trim().is_empty() {
        vec!["Title is required.".to_string()]
    } else {
        Vec::new()
    }
}
