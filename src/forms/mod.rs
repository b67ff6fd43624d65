//! Form definitions backing the sample API routes.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

pub mod sample;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(FieldErrors),

    #[error("malformed request body: {0}")]
    Malformed(String),
}

/// Field name to human-readable reasons, ordered by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, reason: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(reason.into());
    }

    /// Drops every reason recorded for `field`.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Laravel-style summary: the first reason plus a count of the rest.
    pub fn summary(&self) -> String {
        let Some(first) = self.0.values().flatten().next() else {
            return "The given data was invalid.".to_string();
        };
        match self.len() - 1 {
            0 => first.clone(),
            1 => format!("{first} (and 1 more error)"),
            rest => format!("{first} (and {rest} more errors)"),
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.0.keys().cloned().collect::<Vec<_>>().join(", ");
        write!(f, "{fields}")
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut result = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            let field = field.to_string();
            for error in list.iter() {
                result.add(&field, describe(&field, error));
            }
        }
        result
    }
}

/// Renders a validator error code as a sentence about `field`.
fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match &*error.code {
        "required" => format!("The {field} field is required."),
        "email" => format!("The {field} field must be a valid email address."),
        "length" => match error.params.get("max").and_then(|max| max.as_u64()) {
            Some(max) => format!("The {field} field must not be greater than {max} characters."),
            None => format!("The {field} field has an invalid length."),
        },
        "string" => format!("The {field} field must be a string."),
        code => format!("The {field} field is invalid ({code})."),
    }
}
