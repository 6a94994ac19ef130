//! Skolem IRI minting.

use once_cell::sync::Lazy;
use std::sync::RwLock;
use uuid::Uuid;

/// Path component between the well-known base and the random identifier.
const GENID_PATH: &str = "/.well-known/genid/";

static SHARED: Lazy<SkolemIriFactory> = Lazy::new(SkolemIriFactory::new);

/// Mints Skolem IRIs for resources that stand in for blank nodes.
///
/// Skolem IRIs are random, not sequential: each one wraps a freshly
/// generated UUID v4. With a well-known base set, the minted IRIs are real
/// addressable identifiers that can be mapped back to blank nodes (see
/// [RDF 1.1, "Replacing Blank Nodes with IRIs"](https://www.w3.org/TR/rdf11-concepts/#section-skolemization));
/// without one, the bare UUID string is returned.
///
/// The serializable-IDs flag tells resource constructors (such as
/// `TextualBody` in the document model) whether the minted identifier
/// belongs in serialized output or should be kept internal only.
///
/// Most callers use the process-wide [`shared`](SkolemIriFactory::shared)
/// instance; its base and flag are mutable, so confine mutation to a
/// single-threaded setup phase and call [`reset`](SkolemIriFactory::reset)
/// between tests.
#[derive(Debug)]
pub struct SkolemIriFactory {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    well_known_base: Option<String>,
    serializable_ids: bool,
}

impl SkolemIriFactory {
    /// Creates an independent factory with no well-known base and
    /// non-serializable IDs.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Returns the process-wide shared factory, created on first call.
    pub fn shared() -> &'static SkolemIriFactory {
        &SHARED
    }

    /// Sets or clears the well-known IRI base (e.g. `https://example.com`).
    /// A trailing slash is trimmed. Returns the factory for chaining.
    pub fn set_well_known_base(&self, base: Option<&str>) -> &Self {
        let normalized = base.map(|b| b.trim_end_matches('/').to_string());
        self.state.write().expect("skolem state poisoned").well_known_base = normalized;
        self
    }

    /// Returns the well-known IRI base, if one is set.
    pub fn well_known_base(&self) -> Option<String> {
        self.state
            .read()
            .expect("skolem state poisoned")
            .well_known_base
            .clone()
    }

    /// Sets whether minted IDs should appear in serialized documents.
    /// Returns the factory for chaining.
    pub fn create_serializable_ids(&self, flag: bool) -> &Self {
        self.state.write().expect("skolem state poisoned").serializable_ids = flag;
        self
    }

    /// Returns whether minted IDs should appear in serialized documents.
    pub fn creates_serializable_ids(&self) -> bool {
        self.state.read().expect("skolem state poisoned").serializable_ids
    }

    /// Mints one Skolem IRI.
    ///
    /// With a well-known base `B` set, the result is
    /// `B/.well-known/genid/<uuid>`; otherwise it is the bare UUID string.
    pub fn skolem_iri(&self) -> String {
        let uuid = Uuid::new_v4();

        match self.well_known_base() {
            Some(base) => format!("{base}{GENID_PATH}{uuid}"),
            None => uuid.to_string(),
        }
    }

    /// Restores the factory to its initial state: no well-known base,
    /// non-serializable IDs. Intended for test isolation on the shared
    /// instance.
    pub fn reset(&self) {
        let mut state = self.state.write().expect("skolem state poisoned");
        state.well_known_base = None;
        state.serializable_ids = false;
    }
}

impl Default for SkolemIriFactory {
    fn default() -> Self {
        Self::new()
    }
}
