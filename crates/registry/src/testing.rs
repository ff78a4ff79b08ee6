//! Test doubles for the ledger store
//!
//! Shipped (not `#[cfg(test)]`) so integration tests and downstream crates
//! can exercise the registry against a deterministic in-memory ledger, a
//! ledger that always fails, and one that fails writes to a single key.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use pactdb_core::error::{Error, Result};
use pactdb_core::traits::{LedgerScan, LedgerStore};

/// In-memory ledger backed by a `BTreeMap`.
///
/// Strongly consistent and durable for the lifetime of the process, which is
/// all the registry's contract with the store requires in tests.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    cells: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.cells.read().len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.cells.read().is_empty()
    }
}

impl LedgerStore for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.cells.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.cells.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.cells.write().remove(key);
        Ok(())
    }
}

impl LedgerScan for MemoryLedger {
    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.cells.read().keys().cloned().collect())
    }
}

/// A ledger whose every operation fails with a store error.
#[derive(Debug, Default)]
pub struct FailingLedger;

impl LedgerStore for FailingLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Err(Error::Store(format!("failed to get state for {key}")))
    }

    fn put(&self, key: &str, _value: &[u8]) -> Result<()> {
        Err(Error::Store(format!("failed to put state for {key}")))
    }

    fn delete(&self, key: &str) -> Result<()> {
        Err(Error::Store(format!("failed to delete state for {key}")))
    }
}

/// A ledger that fails `put` on one configured key and works otherwise.
///
/// Used to reproduce the partially-completed multi-step operations the
/// registry documents: e.g. set the poisoned key to the index key and a
/// create will write the record but fail the index save, leaving an orphan.
#[derive(Debug, Default)]
pub struct FaultLedger {
    inner: MemoryLedger,
    poisoned_put: RwLock<Option<String>>,
}

impl FaultLedger {
    /// Create an empty ledger with no poisoned key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every subsequent `put` to `key`.
    pub fn poison_put(&self, key: &str) {
        *self.poisoned_put.write() = Some(key.to_string());
    }

    /// Clear the poisoned key.
    pub fn heal(&self) {
        *self.poisoned_put.write() = None;
    }

    /// The healthy ledger underneath, for state inspection.
    pub fn inner(&self) -> &MemoryLedger {
        &self.inner
    }
}

impl LedgerStore for FaultLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        if self.poisoned_put.read().as_deref() == Some(key) {
            return Err(Error::Store(format!("failed to put state for {key}")));
        }
        self.inner.put(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key)
    }
}

impl LedgerScan for FaultLedger {
    fn keys(&self) -> Result<Vec<String>> {
        self.inner.keys()
    }
}
