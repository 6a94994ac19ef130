//! CLI command implementations.

pub mod inspect;
pub mod mint;
pub mod skolem;
