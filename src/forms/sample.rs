//! Input accepted by the sample `store` handler.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::sample_user::NewSampleUser;
use crate::forms::{FieldErrors, FormError};

/// Raw request body. Values are kept untyped so that type mismatches can be
/// reported per field instead of rejecting the whole body.
#[derive(Debug, Default, Deserialize)]
pub struct StoreSampleForm {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Validate)]
struct StoreSampleFields {
    #[validate(required, length(max = 255))]
    name: Option<String>,
    #[validate(required, email)]
    email: Option<String>,
    #[validate(length(max = 20))]
    phone: Option<String>,
    message: Option<String>,
}

impl StoreSampleForm {
    /// Parses a JSON request body. An empty body counts as an empty object.
    pub fn from_json(body: &[u8]) -> Result<Self, FormError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|e| FormError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(FormError::Malformed(
                "request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| FormError::Malformed(e.to_string()))
    }

    /// Parses an `application/x-www-form-urlencoded` request body.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        let mut fields: HashMap<String, String> =
            serde_html_form::from_bytes(body).map_err(|e| FormError::Malformed(e.to_string()))?;
        let mut take = |key: &str| fields.remove(key).map(Value::String);

        Ok(Self {
            name: take("name"),
            email: take("email"),
            phone: take("phone"),
            message: take("message"),
        })
    }

    /// Checks the declared constraints and returns the validated subset.
    pub fn validate_input(self) -> Result<NewSampleUser, FormError> {
        let mut type_errors = Vec::new();
        let mut text = |field: &'static str, value: Option<Value>| match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                type_errors.push(field);
                None
            }
        };

        let fields = StoreSampleFields {
            name: text("name", self.name),
            email: text("email", self.email),
            phone: text("phone", self.phone),
            message: text("message", self.message),
        };

        let mut errors = match fields.validate() {
            Ok(()) => FieldErrors::new(),
            Err(err) => FieldErrors::from(&err),
        };
        for field in type_errors {
            errors.clear(field);
            errors.add(field, format!("The {field} field must be a string."));
        }

        if !errors.is_empty() {
            return Err(FormError::Validation(errors));
        }

        match fields {
            StoreSampleFields {
                name: Some(name),
                email: Some(email),
                phone,
                message,
            } => Ok(NewSampleUser {
                name,
                email,
                phone,
                message,
            }),
            _ => Err(FormError::Validation(FieldErrors::new())),
        }
    }
}
