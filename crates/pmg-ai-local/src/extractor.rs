//! Labeled field extraction
//!
//! Prompts carry structured hints as `Label: value` lines, e.g.
//!
//! ```text
//! Cliente: Padaria Sol
//! Atividade: panificação
//! Cidade: Recife
//! ```
//!
//! A missing label is not an error: the extractor answers with the field's
//! fallback value instead.

use pmg_ai_core::{Error, Result};
use regex::Regex;
use serde::Serialize;

/// Label for the client name field
pub const CLIENT_LABEL: &str = "Cliente";
/// Label for the business activity field
pub const ACTIVITY_LABEL: &str = "Atividade";
/// Label for the city field
pub const CITY_LABEL: &str = "Cidade";

/// Fallback when no client is named
pub const CLIENT_FALLBACK: &str = "sua empresa";
/// Fallback when no activity is named
pub const ACTIVITY_FALLBACK: &str = "alimentação";
/// Fallback when no city is named
pub const CITY_FALLBACK: &str = "sua região";

/// Return the first capture of `pattern` in `text`, or `fallback`.
pub fn extract<'a>(text: &'a str, pattern: &Regex, fallback: &'a str) -> &'a str {
    capture(text, pattern).unwrap_or(fallback)
}

fn capture<'a>(text: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r'))
        .filter(|value| !value.is_empty())
}

/// A (label, value) pair read from a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtractedField<'a> {
    pub label: &'static str,
    pub value: &'a str,
    /// False when `value` is the fallback
    pub found: bool,
}

/// Extractor for a single `Label: value` line
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    label: &'static str,
    pattern: Regex,
    fallback: &'static str,
}

impl FieldExtractor {
    /// Build an extractor matching `{label}: ` up to end of line, case-insensitively
    pub fn new(label: &'static str, fallback: &'static str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i){}: ([^\n]+)", regex::escape(label)))
            .map_err(|e| Error::config(format!("Failed to compile pattern for '{}': {}", label, e)))?;

        Ok(Self {
            label,
            pattern,
            fallback,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Extract the field from `text`
    pub fn extract<'a>(&self, text: &'a str) -> ExtractedField<'a> {
        match capture(text, &self.pattern) {
            Some(value) => ExtractedField {
                label: self.label,
                value,
                found: true,
            },
            None => ExtractedField {
                label: self.label,
                value: self.fallback,
                found: false,
            },
        }
    }
}

/// The three client fields shared by the sales-script and personalized-approach replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientProfile<'a> {
    pub client: &'a str,
    pub activity: &'a str,
    pub city: &'a str,
}

impl<'a> ClientProfile<'a> {
    /// Template placeholder bindings
    pub fn bindings(&self) -> [(&'static str, &'a str); 3] {
        [
            ("cliente", self.client),
            ("atividade", self.activity),
            ("cidade", self.city),
        ]
    }
}

/// Extracts a [`ClientProfile`] from a prompt
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    client: FieldExtractor,
    activity: FieldExtractor,
    city: FieldExtractor,
}

impl ProfileExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: FieldExtractor::new(CLIENT_LABEL, CLIENT_FALLBACK)?,
            activity: FieldExtractor::new(ACTIVITY_LABEL, ACTIVITY_FALLBACK)?,
            city: FieldExtractor::new(CITY_LABEL, CITY_FALLBACK)?,
        })
    }

    pub fn extract<'a>(&self, prompt: &'a str) -> ClientProfile<'a> {
        ClientProfile {
            client: self.client.extract(prompt).value,
            activity: self.activity.extract(prompt).value,
            city: self.city.extract(prompt).value,
        }
    }

    /// Every field with its found/fallback status
    pub fn fields<'a>(&self, prompt: &'a str) -> [ExtractedField<'a>; 3] {
        [
            self.client.extract(prompt),
            self.activity.extract(prompt),
            self.city.extract(prompt),
        ]
    }
}
