//! Embedded textual bodies with Skolem identifiers.

use folio_ids::SkolemIriFactory;
use serde::{Deserialize, Serialize};

/// An embedded textual annotation body.
///
/// A textual body has no natural public address, so its identifier is a
/// Skolem IRI drawn from a [`SkolemIriFactory`]. The minted value always
/// exists internally (it backs equality and references), but it appears in
/// serialized output only if the factory was creating serializable IDs at
/// construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextualBody {
    /// Identifier exposed in serialized output; absent when the factory was
    /// in non-serializable mode.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    serializable_id: Option<String>,
    /// The minted Skolem IRI, kept for equality and references.
    #[serde(skip)]
    skolem_id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
}

impl TextualBody {
    /// Creates a textual body using the process-wide Skolem IRI factory.
    pub fn new() -> Self {
        Self::with_factory(SkolemIriFactory::shared())
    }

    /// Creates a textual body using the supplied factory.
    pub fn with_factory(factory: &SkolemIriFactory) -> Self {
        let skolem_id = factory.skolem_iri();
        let serializable_id = factory
            .creates_serializable_ids()
            .then(|| skolem_id.clone());

        Self {
            serializable_id,
            skolem_id,
            kind: "TextualBody".to_string(),
            value: None,
            language: None,
            format: None,
        }
    }

    /// Returns this body's identifier: the serialized one when present,
    /// otherwise the internal Skolem IRI.
    pub fn id(&self) -> &str {
        self.serializable_id.as_deref().unwrap_or(&self.skolem_id)
    }

    /// Returns whether the identifier appears in serialized output.
    pub fn has_serializable_id(&self) -> bool {
        self.serializable_id.is_some()
    }

    /// Sets the body text.
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the body text, if set.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the body's language tag.
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the body's media type (e.g. `text/plain`).
    pub fn set_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.format = Some(format.into());
        self
    }
}

impl Default for TextualBody {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TextualBody {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TextualBody {}
