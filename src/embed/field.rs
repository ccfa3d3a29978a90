use serde::{Deserialize, Serialize};

/// Rendered in place of an absent or empty value.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    /// Creates a field, substituting [`PLACEHOLDER`] for an empty value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut value = value.into();
        if value.is_empty() {
            value.push_str(PLACEHOLDER);
        }
        Self {
            name: name.into(),
            value,
        }
    }

    /// A field whose value is missing entirely.
    #[must_use]
    pub fn without_value(name: impl Into<String>) -> Self {
        Self::new(name, PLACEHOLDER)
    }
}
