//! Existing-identifier scans handed over by the document model.

/// A flat scan of the identifiers already present in a document tree.
///
/// The document model builds one of these (walking canvases, annotation
/// pages, annotations, and ranges) and hands it to the minting subsystem,
/// which is the only coupling between the two: the minter never sees the
/// tree itself. Identifiers that don't match the minter's own
/// address-and-encoding pattern are recorded here but ignored downstream.
#[derive(Debug, Clone)]
pub struct DocumentScan {
    manifest_id: String,
    existing_ids: Vec<String>,
}

impl DocumentScan {
    /// Creates an empty scan for the given document identifier.
    pub fn new(manifest_id: impl Into<String>) -> Self {
        Self {
            manifest_id: manifest_id.into(),
            existing_ids: Vec::new(),
        }
    }

    /// Records an identifier found in the document tree.
    pub fn record(&mut self, id: impl Into<String>) {
        self.existing_ids.push(id.into());
    }

    /// Returns the document identifier the scan was taken from.
    pub fn manifest_id(&self) -> &str {
        &self.manifest_id
    }

    /// Returns every identifier recorded by the scan.
    pub fn existing_ids(&self) -> &[String] {
        &self.existing_ids
    }
}
