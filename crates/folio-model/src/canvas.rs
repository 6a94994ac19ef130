//! Canvases onto which content is painted.

use crate::annotation_page::AnnotationPage;
use crate::id::ResourceId;
use crate::label::Label;
use serde::{Deserialize, Serialize};

/// One view of a document: a page, frame, or surface.
///
/// Painting pages live in `items`; supplementing pages (transcriptions and
/// the like) live in `annotations`, matching the exchange format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    id: ResourceId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<AnnotationPage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<AnnotationPage>,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Self {
            id: id.into(),
            kind: "Canvas".to_string(),
            label: None,
            width: None,
            height: None,
            items: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Returns the canvas's identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Sets the canvas's label.
    pub fn set_label(&mut self, label: Label) -> &mut Self {
        self.label = Some(label);
        self
    }

    /// Sets the canvas's pixel dimensions.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Appends a page of painting annotations.
    pub fn add_painting_page(&mut self, page: AnnotationPage) -> &mut Self {
        self.items.push(page);
        self
    }

    /// Appends a page of supplementing annotations.
    pub fn add_supplementing_page(&mut self, page: AnnotationPage) -> &mut Self {
        self.annotations.push(page);
        self
    }

    /// Returns the canvas's painting pages in order.
    pub fn painting_pages(&self) -> &[AnnotationPage] {
        &self.items
    }

    /// Returns the canvas's supplementing pages in order.
    pub fn supplementing_pages(&self) -> &[AnnotationPage] {
        &self.annotations
    }
}
