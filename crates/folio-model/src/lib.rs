//! Document-tree model for folio.
//!
//! This crate provides the resource hierarchy that the minting subsystem
//! serves: a `Manifest` with ordered `Canvas` items, `AnnotationPage`s and
//! `Annotation`s attached to canvases, and `Range` structures. The types
//! (de)serialize to the JSON exchange shape and expose
//! [`Manifest::id_scan`], which collects every identifier in a tree so a
//! minter can be pre-seeded against it.
//!
//! `TextualBody` consumes Skolem IRIs from `folio-ids` for resources that
//! opt out of public addressability.

#![deny(missing_docs)]

/// Annotations attaching content to canvases.
pub mod annotation;
/// Pages grouping ordered annotations.
pub mod annotation_page;
/// Canvases onto which content is painted.
pub mod canvas;
/// Error types for model validation.
pub mod errors;
/// Resource identifier newtype and validation.
pub mod id;
/// Language-map labels.
pub mod label;
/// The top-level manifest resource.
pub mod manifest;
/// Named, ordered groupings of canvases.
pub mod range;
/// Embedded textual bodies with Skolem identifiers.
pub mod textual_body;

pub use annotation::{Annotation, Motivation};
pub use annotation_page::AnnotationPage;
pub use canvas::Canvas;
pub use errors::ModelError;
pub use id::ResourceId;
pub use label::Label;
pub use manifest::Manifest;
pub use range::Range;
pub use textual_body::TextualBody;
