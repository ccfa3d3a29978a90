mod color;
mod field;

use serde::{Deserialize, Serialize};

pub use color::Color;
pub use field::{Field, PLACEHOLDER};

/// The single embed carried by every webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// Top-level webhook request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub embeds: Vec<Embed>,
}

impl Envelope {
    #[must_use]
    pub fn new(content: impl Into<String>, embed: Embed) -> Self {
        Self {
            content: content.into(),
            embeds: vec![embed],
        }
    }

    /// The embed built by the formatter. `None` only for envelopes that were
    /// deserialized from elsewhere.
    #[must_use]
    pub fn embed(&self) -> Option<&Embed> {
        self.embeds.first()
    }
}
