use serde::Deserialize;
use validator::{Validate, ValidateError};

use crate::util::validation::is_valid_phone_number;

/// Body of `POST /authors`.
///
/// Uniqueness of `name` needs the store and is checked by
/// [`Author::create`](crate::schema::Author::create); everything
/// here is checkable from the value alone.
#[derive(Debug, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub phone_number: Option<String>,
}

impl Validate for CreateAuthor {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();

        fields.insert("name", {
            let mut error = ValidateError::msg_builder();
            if self.name.is_empty() {
                error.insert("Name field is required.");
            }
            error.build()
        });

        if let Some(phone_number) = self.phone_number.as_deref() {
            fields.insert("phone_number", {
                let mut error = ValidateError::msg_builder();
                if !is_valid_phone_number(phone_number) {
                    error.insert("Phone number must be 10 digits.");
                }
                error.build()
            });
        }

        fields.build().into_result()
    }
}
