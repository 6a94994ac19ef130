//! Identifier minting for folio documents.
//!
//! This crate provides:
//! - A NOID encoder: a fixed-width, fixed-radix bijection between counter
//!   values and opaque four-character strings
//! - A `Minter` capability trait and the sequential `DefaultMinter`
//! - A `MinterFactory` that resolves which minter implementation to build
//!   (explicit override, then environment, then the built-in default)
//! - A `SkolemIriFactory` for blank-node identifiers outside any document's
//!   sequence
//!
//! A minter is scoped to one document and guarantees that no identifier is
//! issued twice over the lifetime of that instance, including identifiers
//! already present in a scanned document tree.

#![deny(missing_docs)]

/// Sequential minter implementation.
pub mod default_minter;
/// Error types for minting operations.
pub mod errors;
/// Minter resolution and construction.
pub mod factory;
/// The minter capability trait.
pub mod minter;
/// NOID encoding primitives.
pub mod noid;
/// Existing-identifier scans handed over by the document model.
pub mod scan;
/// Skolem IRI minting.
pub mod skolem;

pub use default_minter::DefaultMinter;
pub use errors::MintingError;
pub use factory::{MinterConstructor, MinterFactory, MinterSource, DEFAULT_MINTER_NAME, MINTER_ENV_VAR};
pub use minter::{Minter, ResourceKind};
pub use scan::DocumentScan;
pub use skolem::SkolemIriFactory;
