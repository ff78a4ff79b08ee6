//! Ledger store abstraction
//!
//! The registry is built on a hosting ledger that offers only single-key
//! get/put/delete: no multi-key transactions, no atomicity across two calls,
//! and (by default) no listing primitive. The traits here are that contract,
//! nothing more. Correctness of the registry's multi-step operations relies
//! on the host serializing invocations; see the registry crate.

use crate::error::Result;

/// Single-key ledger store.
///
/// Methods take `&self`; implementations use interior mutability. Each call
/// either completes or fails outright - there is no retry at this layer, and
/// a failure of any call surfaces immediately to the registry operation that
/// issued it.
pub trait LedgerStore: Send + Sync {
    /// Get the bytes stored at `key`. An absent key is `None`, not an error.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` at `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete `key`. Deleting an absent key is a success.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Optional enumeration capability.
///
/// Not every hosting ledger permits key enumeration; implementations that do
/// can expose it here, which enables index reconciliation
/// (`Registry::rebuild_index`).
pub trait LedgerScan: LedgerStore {
    /// All keys currently present in the store, in unspecified order.
    fn keys(&self) -> Result<Vec<String>>;
}
