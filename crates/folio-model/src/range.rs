//! Named, ordered groupings of canvases.

use crate::id::ResourceId;
use crate::label::Label;
use serde::{Deserialize, Serialize};

/// A table-of-contents-like grouping of canvases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    id: ResourceId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<ResourceId>,
}

impl Range {
    /// Creates an empty range.
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Self {
            id: id.into(),
            kind: "Range".to_string(),
            label: None,
            items: Vec::new(),
        }
    }

    /// Returns the range's identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Sets the range's label.
    pub fn set_label(&mut self, label: Label) -> &mut Self {
        self.label = Some(label);
        self
    }

    /// Appends a canvas reference to the range.
    pub fn add_canvas(&mut self, canvas_id: impl Into<ResourceId>) -> &mut Self {
        self.items.push(canvas_id.into());
        self
    }

    /// Returns the referenced canvases in order.
    pub fn canvases(&self) -> &[ResourceId] {
        &self.items
    }
}
