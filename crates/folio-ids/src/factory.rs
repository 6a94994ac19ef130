//! Minter resolution and construction.

use crate::default_minter::DefaultMinter;
use crate::errors::MintingError;
use crate::minter::Minter;
use crate::scan::DocumentScan;
use std::collections::HashMap;
use std::sync::Mutex;

/// Environment variable naming an alternate minter implementation.
pub const MINTER_ENV_VAR: &str = "FOLIO_MINTER";

/// Name the built-in sequential minter is registered under.
pub const DEFAULT_MINTER_NAME: &str = "default";

/// Construction input for a minter: either a bare document identifier or a
/// scan of an existing document tree to pre-seed against.
#[derive(Debug, Clone)]
pub enum MinterSource<'a> {
    /// A document identifier with no known pre-existing resources.
    ManifestId(&'a str),
    /// A scan of a document tree whose identifiers must not be re-issued.
    Document(&'a DocumentScan),
}

/// Constructor function for a minter implementation.
///
/// Every implementation accepts the same construction contract; the factory
/// is polymorphic over how a minter is built, not over the shape of the
/// identifiers it mints.
pub type MinterConstructor = fn(&MinterSource<'_>) -> Result<Box<dyn Minter>, MintingError>;

/// Resolves and constructs minters for documents.
///
/// Resolution checks three layers in priority order, first match wins:
///
/// 1. The override slot ([`set_minter`](MinterFactory::set_minter) /
///    [`clear_minter`](MinterFactory::clear_minter)), intended for tests
///    and embedding.
/// 2. The `FOLIO_MINTER` environment variable, read once on first
///    resolution and cached; changing the process environment afterwards
///    has no effect until [`clear_env_cache`](MinterFactory::clear_env_cache)
///    is called.
/// 3. The built-in `"default"` implementation.
///
/// A resolved name with no registered constructor is a configuration error;
/// the factory never falls back silently, since that would mask a
/// misconfiguration.
///
/// The factory is an explicit context object rather than process-global
/// state: construct one during startup and pass it (or share it behind an
/// `Arc`) to whatever builds documents. Mutating the override slot while
/// other threads resolve minters is safe but races; keep mutation to a
/// single-threaded setup phase.
pub struct MinterFactory {
    registry: HashMap<String, MinterConstructor>,
    override_name: Mutex<Option<String>>,
    env_cache: Mutex<Option<Option<String>>>,
}

impl MinterFactory {
    /// Creates a factory with the built-in default minter registered.
    pub fn new() -> Self {
        let mut registry: HashMap<String, MinterConstructor> = HashMap::new();
        registry.insert(DEFAULT_MINTER_NAME.to_string(), construct_default);

        Self {
            registry,
            override_name: Mutex::new(None),
            env_cache: Mutex::new(None),
        }
    }

    /// Registers a minter implementation under a name.
    ///
    /// Registering an existing name (including `"default"`) replaces the
    /// previous constructor.
    pub fn register(&mut self, name: impl Into<String>, constructor: MinterConstructor) {
        self.registry.insert(name.into(), constructor);
    }

    /// Sets the override slot to the named implementation.
    pub fn set_minter(&self, name: impl Into<String>) {
        *self.override_name.lock().expect("override slot poisoned") = Some(name.into());
    }

    /// Clears the override slot, returning the previously set name.
    pub fn clear_minter(&self) -> Option<String> {
        self.override_name.lock().expect("override slot poisoned").take()
    }

    /// Returns the currently set override name, if any.
    pub fn minter_override(&self) -> Option<String> {
        self.override_name.lock().expect("override slot poisoned").clone()
    }

    /// Drops the cached environment lookup so the next resolution re-reads
    /// `FOLIO_MINTER`.
    pub fn clear_env_cache(&self) {
        *self.env_cache.lock().expect("env cache poisoned") = None;
    }

    /// Primes the environment cache with an explicit value, bypassing the
    /// process environment. This is the test and embedding seam for the
    /// environment layer; `Some(None)` semantics apply (a `None` value
    /// caches "variable not set").
    pub fn set_cached_env(&self, value: Option<String>) {
        *self.env_cache.lock().expect("env cache poisoned") = Some(value);
    }

    /// Builds a minter for a bare document identifier.
    pub fn minter_for_id(&self, manifest_id: &str) -> Result<Box<dyn Minter>, MintingError> {
        self.minter(&MinterSource::ManifestId(manifest_id))
    }

    /// Builds a minter pre-seeded from a document scan.
    pub fn minter_for_document(&self, scan: &DocumentScan) -> Result<Box<dyn Minter>, MintingError> {
        self.minter(&MinterSource::Document(scan))
    }

    /// Resolves the configured implementation and constructs a minter from
    /// the given source.
    pub fn minter(&self, source: &MinterSource<'_>) -> Result<Box<dyn Minter>, MintingError> {
        let name = self.resolve_name();
        let constructor = self
            .registry
            .get(&name)
            .ok_or_else(|| MintingError::UnknownImplementation(name.clone()))?;

        constructor(source)
    }

    /// Applies the three-tier resolution protocol.
    fn resolve_name(&self) -> String {
        if let Some(name) = self.minter_override() {
            return name;
        }

        if let Some(name) = self.cached_env_name() {
            return name;
        }

        DEFAULT_MINTER_NAME.to_string()
    }

    /// Returns the environment-configured name, reading `FOLIO_MINTER` on
    /// first use and caching the result (even when unset).
    fn cached_env_name(&self) -> Option<String> {
        let mut cache = self.env_cache.lock().expect("env cache poisoned");

        cache
            .get_or_insert_with(|| std::env::var(MINTER_ENV_VAR).ok())
            .clone()
    }
}

impl Default for MinterFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Constructor for the built-in sequential minter.
fn construct_default(source: &MinterSource<'_>) -> Result<Box<dyn Minter>, MintingError> {
    match source {
        MinterSource::ManifestId(id) => Ok(Box::new(DefaultMinter::new(*id))),
        MinterSource::Document(scan) => Ok(Box::new(DefaultMinter::from_scan(scan))),
    }
}
