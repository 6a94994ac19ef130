//! Pages grouping ordered annotations.

use crate::annotation::Annotation;
use crate::id::ResourceId;
use serde::{Deserialize, Serialize};

/// An ordered collection of annotations on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPage {
    id: ResourceId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<Annotation>,
}

impl AnnotationPage {
    /// Creates an empty annotation page.
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Self {
            id: id.into(),
            kind: "AnnotationPage".to_string(),
            items: Vec::new(),
        }
    }

    /// Returns the page's identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Appends an annotation to the page.
    pub fn add_annotation(&mut self, annotation: Annotation) -> &mut Self {
        self.items.push(annotation);
        self
    }

    /// Returns the page's annotations in order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.items
    }
}
