//! Sequential minter implementation.

use crate::errors::MintingError;
use crate::minter::{Minter, ResourceKind};
use crate::noid;
use crate::scan::DocumentScan;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};

/// Path segment for canvas identifiers.
const CANVAS_SEGMENT: &str = "/canvas-";

/// Path segment for range identifiers.
const RANGE_SEGMENT: &str = "/range-";

/// Path segment for annotation identifiers.
const ANNOTATION_SEGMENT: &str = "/annotations/anno-";

/// Path segment for annotation page identifiers (scoped under a canvas).
const PAGE_SEGMENT: &str = "/anno-page-";

/// Mints intra-document identifiers from one shared NOID sequence.
///
/// Every resource kind draws from the same counter; the kind only changes
/// the path segment of the resulting identifier. The counter advances with
/// an atomic increment-and-fetch, so a single instance shared across
/// threads still never issues the same identifier twice.
///
/// When built from a [`DocumentScan`], the counter positions of identifiers
/// already present in the document are marked as issued and skipped, so
/// resources in a round-tripped document are never revisited.
#[derive(Debug)]
pub struct DefaultMinter {
    manifest_id: String,
    /// Next counter position to try. Only ever moves forward.
    cursor: AtomicU32,
    /// Number of identifiers actually handed out by this instance.
    minted: AtomicU32,
    /// Counter positions consumed by the document before this minter existed.
    seeded: HashSet<u32>,
}

impl DefaultMinter {
    /// Creates a minter for a bare document identifier.
    ///
    /// The minter knows nothing about identifiers already present in any
    /// existing document tree; use [`DefaultMinter::from_scan`] for that.
    pub fn new(manifest_id: impl Into<String>) -> Self {
        Self {
            manifest_id: manifest_id.into(),
            cursor: AtomicU32::new(0),
            minted: AtomicU32::new(0),
            seeded: HashSet::new(),
        }
    }

    /// Creates a minter pre-seeded against an existing document tree.
    ///
    /// Every scanned identifier that matches this minter's own address and
    /// encoding pattern has its counter position recorded as already
    /// issued. Identifiers that don't match (externally supplied IDs,
    /// malformed suffixes, wrong width) are ignored and consume no
    /// capacity.
    pub fn from_scan(scan: &DocumentScan) -> Self {
        let mut minter = Self::new(scan.manifest_id());

        for id in scan.existing_ids() {
            if let Some(index) = minter.scanned_index(id) {
                minter.seeded.insert(index);
            }
        }

        minter
    }

    /// Decodes the counter position of an identifier this minter could have
    /// produced, or `None` if the identifier is not ours.
    fn scanned_index(&self, id: &str) -> Option<u32> {
        // Annotation pages hang off canvas addresses, and a canvas address
        // usually sits under the document base itself, so the page segment
        // must be matched before the base-prefixed segments claim the ID.
        // The canvas may also be an arbitrary external URI; either way only
        // the trailing segment is ours to match.
        if let Some(position) = id.rfind(PAGE_SEGMENT) {
            return noid::decode(&id[position + PAGE_SEGMENT.len()..]);
        }

        if let Some(rest) = id.strip_prefix(self.manifest_id.as_str()) {
            for segment in [CANVAS_SEGMENT, RANGE_SEGMENT, ANNOTATION_SEGMENT] {
                if let Some(encoded) = rest.strip_prefix(segment) {
                    return noid::decode(encoded);
                }
            }
        }

        None
    }

    /// Draws the next unissued counter position and encodes it.
    fn next_noid(&self, kind: ResourceKind) -> Result<String, MintingError> {
        loop {
            let drawn = self.cursor.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                if n >= noid::CAPACITY {
                    None
                } else {
                    Some(n + 1)
                }
            });

            let index = match drawn {
                Ok(index) => index,
                Err(_) => {
                    return Err(MintingError::Exhausted {
                        manifest_id: self.manifest_id.clone(),
                        kind,
                    });
                }
            };

            if self.seeded.contains(&index) {
                continue;
            }

            self.minted.fetch_add(1, Ordering::Relaxed);
            return Ok(noid::encode(index));
        }
    }
}

impl Minter for DefaultMinter {
    fn manifest_id(&self) -> &str {
        &self.manifest_id
    }

    fn canvas_id(&self) -> Result<String, MintingError> {
        let noid = self.next_noid(ResourceKind::Canvas)?;
        Ok(format!("{}{}{}", self.manifest_id, CANVAS_SEGMENT, noid))
    }

    fn annotation_id(&self) -> Result<String, MintingError> {
        let noid = self.next_noid(ResourceKind::Annotation)?;
        Ok(format!("{}{}{}", self.manifest_id, ANNOTATION_SEGMENT, noid))
    }

    fn annotation_page_id(&self, canvas_id: &str) -> Result<String, MintingError> {
        let noid = self.next_noid(ResourceKind::AnnotationPage)?;
        Ok(format!("{}{}{}", canvas_id, PAGE_SEGMENT, noid))
    }

    fn range_id(&self) -> Result<String, MintingError> {
        let noid = self.next_noid(ResourceKind::Range)?;
        Ok(format!("{}{}{}", self.manifest_id, RANGE_SEGMENT, noid))
    }

    fn has_next(&self) -> bool {
        self.remaining() > 0
    }

    fn size(&self) -> u32 {
        noid::CAPACITY
    }

    fn remaining(&self) -> u32 {
        // Seeded positions are skipped during minting, so minted and seeded
        // counts never overlap.
        noid::CAPACITY - self.minted.load(Ordering::Relaxed) - self.seeded.len() as u32
    }
}
