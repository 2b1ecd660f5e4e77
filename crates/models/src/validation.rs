//! Field-level validation for [`CreateUserRequest`].
//!
//! The store itself never validates; these checks belong to whatever edge
//! accepts user input (a form, an importer). All failing fields are
//! reported at once so a caller can surface every message together.

use crate::errors::ModelError;
use crate::user::CreateUserRequest;

/// A single failed field: which field, and the message to show for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str, label: &str) -> Self {
        Self { field, message: format!("{label} is required") }
    }
}

/// Validate a create request. Empty result means the request is valid.
///
/// Rules: name/email/phone/company/street/city/zipcode must be non-blank;
/// email must additionally look like `local@domain.tld`. Geo coordinates
/// are optional and never checked.
pub fn validate_create_request(request: &CreateUserRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if request.name.trim().is_empty() {
        errors.push(FieldError::required("name", "Name"));
    }
    if request.email.trim().is_empty() {
        errors.push(FieldError::required("email", "Email"));
    } else if !is_plausible_email(&request.email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address".to_string(),
        });
    }
    if request.phone.trim().is_empty() {
        errors.push(FieldError::required("phone", "Phone"));
    }
    if request.company.trim().is_empty() {
        errors.push(FieldError::required("company", "Company"));
    }
    if request.address.street.trim().is_empty() {
        errors.push(FieldError::required("street", "Street"));
    }
    if request.address.city.trim().is_empty() {
        errors.push(FieldError::required("city", "City"));
    }
    if request.address.zipcode.trim().is_empty() {
        errors.push(FieldError::required("zipcode", "Zipcode"));
    }

    errors
}

/// All-or-nothing form of [`validate_create_request`] for callers that
/// want a single `Result` instead of per-field reporting.
pub fn ensure_valid(request: &CreateUserRequest) -> Result<(), ModelError> {
    let errors = validate_create_request(request);
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(ModelError::Validation(joined))
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one
/// `@`, non-empty local part, domain containing a dot with non-empty
/// labels around it, and no whitespace anywhere.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
