//! Annotations attaching content to canvases.

use crate::id::ResourceId;
use crate::textual_body::TextualBody;
use serde::{Deserialize, Serialize};

/// Why an annotation is attached to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motivation {
    /// The body is painted onto the canvas (images, audio, video).
    Painting,
    /// The body supplements the canvas (transcriptions, translations).
    Supplementing,
}

/// A typed attachment of content to a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    id: ResourceId,
    #[serde(rename = "type")]
    kind: String,
    motivation: Motivation,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<TextualBody>,
    target: ResourceId,
}

impl Annotation {
    /// Creates an annotation of the given motivation targeting a canvas.
    pub fn new(
        id: impl Into<ResourceId>,
        motivation: Motivation,
        target: impl Into<ResourceId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: "Annotation".to_string(),
            motivation,
            body: None,
            target: target.into(),
        }
    }

    /// Returns the annotation's identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns the annotation's motivation.
    pub fn motivation(&self) -> Motivation {
        self.motivation
    }

    /// Sets the annotation's body.
    pub fn set_body(&mut self, body: TextualBody) -> &mut Self {
        self.body = Some(body);
        self
    }

    /// Returns the annotation's body, if any.
    pub fn body(&self) -> Option<&TextualBody> {
        self.body.as_ref()
    }

    /// Returns the annotation's target.
    pub fn target(&self) -> &ResourceId {
        &self.target
    }
}
