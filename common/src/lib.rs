use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

/// Field name → human-readable message, one entry per failing field.
pub type FieldErrors = BTreeMap<String, String>;

/// Flattens `ValidationErrors` into one message per field.
///
/// When a field carries several errors, the first one wins. Errors without a
/// message fall back to their code.
pub fn field_error_map(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

/// `customer_name` → `customer name`
pub fn field_label(field: &str) -> String {
    field.replace('_', " ")
}

pub fn error_with_message(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

pub fn required_error(field: &str) -> ValidationError {
    error_with_message(
        "required",
        format!("The {} field is required.", field_label(field)),
    )
}

pub fn max_length_error(field: &str, max: usize) -> ValidationError {
    error_with_message(
        "length",
        format!(
            "The {} field must not be greater than {} characters.",
            field_label(field),
            max
        ),
    )
}

pub fn string_error(field: &str) -> ValidationError {
    error_with_message(
        "string",
        format!("The {} field must be a string.", field_label(field)),
    )
}

pub fn not_in_set_error(field: &str) -> ValidationError {
    error_with_message("in", format!("The selected {} is invalid.", field_label(field)))
}

/// Trimmed text must be non-empty and at most `max` characters, if given.
pub fn check_text(field: &str, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(required_error(field));
    }
    match max {
        Some(max) if trimmed.chars().count() > max => Err(max_length_error(field, max)),
        _ => Ok(()),
    }
}
