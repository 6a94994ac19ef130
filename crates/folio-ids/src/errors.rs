//! Error types for minting operations.

use crate::minter::ResourceKind;
use thiserror::Error;

/// Errors that can occur while minting or resolving a minter.
#[derive(Error, Debug)]
pub enum MintingError {
    /// The minter has issued every identifier its encoding can represent.
    /// Wrap-around is never acceptable: it would re-issue an identifier.
    #[error("no {kind} identifiers left to mint for {manifest_id}")]
    Exhausted {
        /// Document whose sequence ran out.
        manifest_id: String,
        /// Resource kind that was being minted when capacity ran out.
        kind: ResourceKind,
    },
    /// No minter implementation is registered under the resolved name.
    #[error("no minter implementation registered as '{0}'")]
    UnknownImplementation(String),
    /// A registered implementation failed while constructing itself.
    #[error("minter implementation '{name}' failed to construct: {reason}")]
    Construction {
        /// Name the implementation was registered under.
        name: String,
        /// Reason reported by the implementation's constructor.
        reason: String,
    },
}
