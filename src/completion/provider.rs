//! Dynamic option provider
//!
//! Supplies the live identifier-to-label mappings injected into the
//! completion tree each prompt cycle. Fetches go straight to the record
//! store; any failure degrades to an empty mapping so completion never
//! crashes the input loop. Completion is an ergonomic aid, not a
//! correctness gate.

use indexmap::IndexMap;
use tracing::debug;

use crate::store::RecordStore;

/// The kinds of data-backed completion slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicKind {
    /// Target ids labeled with target names
    Targets,

    /// Vulnerability ids labeled with finding titles
    Vulnerabilities,
}

/// Source of live completion options
pub trait OptionProvider {
    /// Fetch identifier-to-label options for one kind
    ///
    /// Returns an empty mapping on any data-access failure. Called once
    /// per kind per prompt cycle; results are not cached across cycles.
    fn fetch(&self, kind: DynamicKind) -> IndexMap<String, String>;
}

/// Record-store-backed option provider
pub struct StoreOptionProvider {
    /// Store to read identifiers from
    store: RecordStore,
}

impl StoreOptionProvider {
    /// Create a new provider reading from the given store
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl OptionProvider for StoreOptionProvider {
    fn fetch(&self, kind: DynamicKind) -> IndexMap<String, String> {
        let result = match kind {
            DynamicKind::Targets => self.store.target_labels(),
            DynamicKind::Vulnerabilities => self.store.vuln_labels(),
        };

        match result {
            Ok(labels) => labels
                .into_iter()
                .map(|(id, label)| (id.to_string(), label))
                .collect(),
            Err(e) => {
                debug!("dynamic completion fetch for {kind:?} failed: {e}");
                IndexMap::new()
            }
        }
    }
}
