//! The top-level manifest resource.

use crate::canvas::Canvas;
use crate::id::ResourceId;
use crate::label::Label;
use crate::range::Range;
use folio_ids::DocumentScan;
use serde::{Deserialize, Serialize};

/// JSON-LD context of the exchange format.
pub const CONTEXT: &str = "http://iiif.io/api/presentation/3/context.json";

/// The top-level resource describing a complete digital object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "@context")]
    context: String,
    id: ResourceId,
    #[serde(rename = "type")]
    kind: String,
    label: Label,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<Canvas>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    structures: Vec<Range>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new(id: impl Into<ResourceId>, label: Label) -> Self {
        Self {
            context: CONTEXT.to_string(),
            id: id.into(),
            kind: "Manifest".to_string(),
            label,
            items: Vec::new(),
            structures: Vec::new(),
        }
    }

    /// Returns the manifest's identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Returns the manifest's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Appends a canvas to the manifest.
    pub fn add_canvas(&mut self, canvas: Canvas) -> &mut Self {
        self.items.push(canvas);
        self
    }

    /// Returns the manifest's canvases in order.
    pub fn canvases(&self) -> &[Canvas] {
        &self.items
    }

    /// Appends a range to the manifest.
    pub fn add_range(&mut self, range: Range) -> &mut Self {
        self.structures.push(range);
        self
    }

    /// Returns the manifest's ranges in order.
    pub fn ranges(&self) -> &[Range] {
        &self.structures
    }

    /// Collects every identifier in the tree into a scan for minter
    /// seeding: canvases, their painting and supplementing pages, the
    /// annotations on each page, and ranges.
    pub fn id_scan(&self) -> DocumentScan {
        let mut scan = DocumentScan::new(self.id.as_ref());

        for canvas in &self.items {
            scan.record(canvas.id().as_ref());

            for page in canvas.painting_pages().iter().chain(canvas.supplementing_pages()) {
                scan.record(page.id().as_ref());

                for annotation in page.annotations() {
                    scan.record(annotation.id().as_ref());
                }
            }
        }

        for range in &self.structures {
            scan.record(range.id().as_ref());
        }

        scan
    }
}
