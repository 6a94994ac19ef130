//! The minter capability trait.

use crate::errors::MintingError;
use std::fmt;

/// Resource kinds a minter can produce identifiers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A canvas onto which content is painted.
    Canvas,
    /// A page grouping ordered annotations on a canvas.
    AnnotationPage,
    /// An annotation attaching content to a canvas.
    Annotation,
    /// A named, ordered grouping of canvases.
    Range,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Canvas => "canvas",
            ResourceKind::AnnotationPage => "annotation page",
            ResourceKind::Annotation => "annotation",
            ResourceKind::Range => "range",
        };
        f.write_str(label)
    }
}

/// Capability set shared by every minting strategy.
///
/// A minter is scoped to one document: every identifier it returns is unique
/// over the lifetime of the instance. Two independently constructed minters
/// for the same document make no such promise to each other.
///
/// All operations take `&self`; implementations must keep the uniqueness
/// guarantee even when one instance is shared across threads.
pub trait Minter: Send + Sync {
    /// Returns the document identifier this minter is scoped under, unchanged.
    fn manifest_id(&self) -> &str;

    /// Mints an identifier for a new canvas.
    fn canvas_id(&self) -> Result<String, MintingError>;

    /// Mints an identifier for a new annotation.
    fn annotation_id(&self) -> Result<String, MintingError>;

    /// Mints an identifier for a new annotation page on the given canvas.
    ///
    /// The identifier is scoped under the canvas's own address rather than
    /// the document's.
    fn annotation_page_id(&self, canvas_id: &str) -> Result<String, MintingError>;

    /// Mints an identifier for a new range.
    fn range_id(&self) -> Result<String, MintingError>;

    /// Returns whether another identifier can still be minted.
    fn has_next(&self) -> bool;

    /// Returns the total number of identifiers this minter can ever mint.
    fn size(&self) -> u32;

    /// Returns the number of identifiers still available.
    fn remaining(&self) -> u32;
}
