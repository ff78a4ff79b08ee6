//! Index manager: the persisted list of known contract identifiers
//!
//! The ledger has no listing primitive, so enumeration is implemented as a
//! single JSON array of identifiers stored under one reserved key. The whole
//! array is read-modify-written on every mutation; no partial index update is
//! ever visible on the ledger.
//!
//! There is no cross-call cache. Every registry operation loads a fresh
//! `ContractIndex`, mutates it in memory, and saves it back.

use pactdb_core::error::Result;
use pactdb_core::traits::LedgerStore;

/// Reserved ledger key holding the encoded index.
///
/// Record identifiers and raw write keys share the same key space; callers
/// must not collide with this key.
pub const INDEX_KEY: &str = "_contractindex";

/// In-memory ordered sequence of known contract identifiers.
///
/// Appends preserve insertion order. Duplicates are not checked here -
/// duplicate prevention is the registry's job via its existence check before
/// create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractIndex {
    ids: Vec<String>,
}

impl ContractIndex {
    /// Load the index from the reserved key.
    ///
    /// An absent or malformed stored value decodes to the empty index; only
    /// ledger I/O failures propagate.
    pub fn load<S: LedgerStore>(store: &S) -> Result<Self> {
        let ids = match store.get(INDEX_KEY)? {
            Some(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(ContractIndex { ids })
    }

    /// Persist the index, overwriting the previous value in full.
    pub fn save<S: LedgerStore>(&self, store: &S) -> Result<()> {
        let bytes = serde_json::to_vec(&self.ids)?;
        store.put(INDEX_KEY, &bytes)
    }

    /// Append an identifier at the end.
    pub fn append(&mut self, id: &str) {
        self.ids.push(id.to_string());
    }

    /// Remove the first occurrence of `id`, preserving the order of the rest.
    ///
    /// Removing an identifier that is not present is a silent no-op. Only the
    /// first occurrence goes, so a duplicated identifier (which the
    /// invariants rule out, but corruption could produce) never loses more
    /// than one entry per call.
    pub fn remove(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
        }
    }

    /// True if `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// The identifiers, in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no identifiers are indexed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for ContractIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        ContractIndex {
            ids: iter.into_iter().collect(),
        }
    }
}
