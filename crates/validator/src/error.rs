use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;
use std::borrow::Cow;

/// Collects messages for a single field.
pub struct MessageBuilder(Vec<Cow<'static, str>>);

impl MessageBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, message: impl Into<Cow<'static, str>>) {
        self.0.push(message.into());
    }

    #[must_use]
    pub fn build(self) -> ValidateError {
        ValidateError::Messages(self.0)
    }
}

/// Collects per-field errors, keyed by field name. Empty entries
/// are silently dropped so callers can build unconditionally.
pub struct FieldBuilder(IndexMap<Cow<'static, str>, ValidateError>);

#[allow(clippy::new_without_default)]
impl FieldBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::default())
    }

    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: ValidateError) {
        if !value.is_empty() {
            self.0.insert(key.into(), value);
        }
    }

    #[must_use]
    pub fn build(self) -> ValidateError {
        ValidateError::Fields(self.0)
    }
}

// ---------------------------------------------------- //

#[derive(PartialEq, Eq)]
pub enum ValidateError {
    Fields(IndexMap<Cow<'static, str>, ValidateError>),
    Messages(Vec<Cow<'static, str>>),
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid data occurred")
    }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidateError::Fields(n) => n.fmt(f),
            ValidateError::Messages(n) => f.debug_map().entry(&"_errors", &n).finish(),
        }
    }
}

impl ValidateError {
    #[must_use]
    pub fn field_builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    #[must_use]
    pub const fn msg_builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ValidateError::Fields(n) => n.is_empty(),
            ValidateError::Messages(n) => n.is_empty(),
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ValidateError::Fields(n) => {
                let mut map = serializer.serialize_map(Some(n.len()))?;
                for (key, value) in n {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            ValidateError::Messages(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_errors", &n)?;
                map.end()
            }
        }
    }
}
