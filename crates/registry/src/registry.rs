//! Registry: invariant-preserving orchestration of record and index writes
//!
//! ## Consistency model
//!
//! `create` and `delete` each perform two independent ledger writes (record,
//! then index). The ledger gives no atomicity across them, so a failure
//! between the two leaves an orphan: a live record missing from the index, or
//! an index entry whose record is gone. Nothing here auto-heals that; the
//! failure is surfaced to the caller and [`Registry::rebuild_index`] exists
//! as an explicit maintenance operation for hosts that permit enumeration.

use tracing::{debug, info};

use pactdb_core::codec;
use pactdb_core::contract::{Contract, ContractField};
use pactdb_core::error::{Error, Result};
use pactdb_core::traits::{LedgerScan, LedgerStore};

use crate::index::{ContractIndex, INDEX_KEY};

/// Probe key written by `init` with the initial counter value.
///
/// Kept for parity with the hosting platform's deployment smoke test: a value
/// operators can read and write right away to verify the instance is wired
/// up.
pub const INIT_PROBE_KEY: &str = "abc";

/// The contract registry.
///
/// A stateless facade over a [`LedgerStore`]: no state is cached across
/// operations, every invocation re-reads what it needs. The hosting platform
/// MUST serialize invocations; two logically concurrent create/delete calls
/// would race on the whole-value index rewrite and silently drop an
/// identifier. That total ordering is a precondition, not something enforced
/// here.
#[derive(Debug)]
pub struct Registry<S> {
    store: S,
}

impl<S: LedgerStore> Registry<S> {
    /// Create a registry over a ledger store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reset the registry: write the probe key and empty the index.
    ///
    /// The index is created empty here and is only ever rewritten afterwards,
    /// never deleted.
    pub fn init(&self, initial_counter: i64) -> Result<()> {
        self.store
            .put(INIT_PROBE_KEY, initial_counter.to_string().as_bytes())?;
        ContractIndex::default().save(&self.store)?;
        info!(initial_counter, "registry initialized, index reset");
        Ok(())
    }

    /// Create a new contract record and index its identifier.
    ///
    /// Fails with [`Error::AlreadyExists`] if a live record already occupies
    /// the identifier, in which case nothing is mutated. The record write and
    /// the index save are two independent ledger writes; see the module docs
    /// for the orphan window between them.
    pub fn create(&self, contract: Contract) -> Result<()> {
        let id = contract.name.clone();

        let existing = codec::decode_opt(self.store.get(&id)?.as_deref());
        if existing.name == id {
            debug!(%id, "create rejected, identifier is live");
            return Err(Error::AlreadyExists(id));
        }

        self.store.put(&id, &codec::encode(&contract)?)?;

        let mut index = ContractIndex::load(&self.store)?;
        index.append(&id);
        index.save(&self.store)?;
        debug!(%id, indexed = index.len(), "contract created");
        Ok(())
    }

    /// Raw bytes stored at `key`.
    ///
    /// Does not consult the index. An absent key yields empty bytes rather
    /// than an error, matching the tolerant decode semantics; only a ledger
    /// failure is an error.
    pub fn read_raw(&self, key: &str) -> Result<Vec<u8>> {
        Ok(self.store.get(key)?.unwrap_or_default())
    }

    /// Raw passthrough write. The value is stored as-is under `key`.
    ///
    /// Shares the key space with contract identifiers and the reserved index
    /// key; callers must avoid collisions.
    pub fn write_raw(&self, key: &str, value: &[u8]) -> Result<()> {
        self.store.put(key, value)
    }

    /// Delete the record at `id` and unindex it.
    ///
    /// Idempotent: deleting an unknown identifier succeeds as a no-op. A
    /// store failure on the record delete aborts before the index is touched.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id)?;

        let mut index = ContractIndex::load(&self.store)?;
        index.remove(id);
        index.save(&self.store)?;
        debug!(%id, "contract deleted");
        Ok(())
    }

    /// Set one field of the record at `id` and write it back.
    ///
    /// Does not touch the index. Decode is tolerant, so updating an absent
    /// identifier proceeds against the zero-value record and writes a record
    /// with only the selected field populated - and no index entry. That
    /// upsert is a known flaw carried over from the original behavior,
    /// preserved deliberately rather than fixed silently.
    pub fn update_field(&self, id: &str, field: ContractField, value: &str) -> Result<()> {
        let mut contract = codec::decode_opt(self.store.get(id)?.as_deref());
        contract.set_field(field, value);
        self.store.put(id, &codec::encode(&contract)?)?;
        debug!(%id, field = field.as_str(), "contract field updated");
        Ok(())
    }

    /// Decode-tolerant typed read of the record at `id`.
    ///
    /// Absent or malformed records come back as the zero-value contract.
    pub fn get(&self, id: &str) -> Result<Contract> {
        Ok(codec::decode_opt(self.store.get(id)?.as_deref()))
    }

    /// All indexed contract identifiers, in insertion order.
    pub fn contract_ids(&self) -> Result<Vec<String>> {
        Ok(ContractIndex::load(&self.store)?.ids().to_vec())
    }
}

impl<S: LedgerScan> Registry<S> {
    /// Rebuild the index from a full key scan.
    ///
    /// Maintenance operation for hosts whose ledger permits enumeration: a
    /// key is treated as a live record when its stored bytes decode to a
    /// contract whose identifier equals the key. The reserved index key and
    /// raw passthrough writes fail that test and are excluded. Returns the
    /// number of identifiers in the rebuilt index.
    pub fn rebuild_index(&self) -> Result<usize> {
        let mut rebuilt = ContractIndex::default();
        for key in self.store.keys()? {
            if key == INDEX_KEY {
                continue;
            }
            let record = codec::decode_opt(self.store.get(&key)?.as_deref());
            if record.name == key {
                rebuilt.append(&key);
            }
        }
        rebuilt.save(&self.store)?;
        info!(indexed = rebuilt.len(), "index rebuilt from scan");
        Ok(rebuilt.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingLedger, MemoryLedger};

    fn contract(id: &str) -> Contract {
        Contract {
            name: id.into(),
            startdate: "2024-01-01".into(),
            enddate: "2024-12-31".into(),
            location: "NYC".into(),
            text: "body".into(),
            company1: "P1".into(),
            company2: "P2".into(),
            title: "Title".into(),
        }
    }

    #[test]
    fn test_create_then_get() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();

        let stored = registry.get("C1").unwrap();
        assert_eq!(stored, contract("C1"));
        assert_eq!(registry.contract_ids().unwrap(), vec!["C1".to_string()]);
    }

    #[test]
    fn test_create_duplicate_fails_and_preserves_first() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();

        let mut second = contract("C1");
        second.title = "Other".into();
        let err = registry.create(second).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(ref id) if id == "C1"));

        // First record unmodified, indexed exactly once
        assert_eq!(registry.get("C1").unwrap().title, "Title");
        assert_eq!(registry.contract_ids().unwrap(), vec!["C1".to_string()]);
    }

    #[test]
    fn test_read_raw_absent_is_empty() {
        let registry = Registry::new(MemoryLedger::new());
        assert!(registry.read_raw("never-written").unwrap().is_empty());
    }

    #[test]
    fn test_write_raw_then_read_raw() {
        let registry = Registry::new(MemoryLedger::new());
        registry.write_raw("k", b"opaque bytes").unwrap();
        assert_eq!(registry.read_raw("k").unwrap(), b"opaque bytes");
        // Raw writes are not indexed
        assert!(registry.contract_ids().unwrap().is_empty());
    }

    #[test]
    fn test_delete_removes_record_and_index_entry() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();
        registry.delete("C1").unwrap();

        assert!(registry.read_raw("C1").unwrap().is_empty());
        assert!(registry.contract_ids().unwrap().is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();
        registry.delete("C1").unwrap();
        registry.delete("C1").unwrap();
        registry.delete("never-existed").unwrap();
        assert!(registry.contract_ids().unwrap().is_empty());
    }

    #[test]
    fn test_create_after_delete_succeeds() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();
        registry.delete("C1").unwrap();
        registry.create(contract("C1")).unwrap();
        assert_eq!(registry.contract_ids().unwrap(), vec!["C1".to_string()]);
    }

    #[test]
    fn test_update_field_on_live_record() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();
        registry
            .update_field("C1", ContractField::Company1, "NewParty")
            .unwrap();

        let stored = registry.get("C1").unwrap();
        assert_eq!(stored.company1, "NewParty");
        assert_eq!(stored.title, "Title");
    }

    #[test]
    fn test_update_field_on_absent_record_upserts() {
        // Documented flaw, preserved: the record materializes with only the
        // updated field populated and never enters the index.
        let registry = Registry::new(MemoryLedger::new());
        registry
            .update_field("ghost", ContractField::Company1, "NewParty")
            .unwrap();

        let stored = registry.get("ghost").unwrap();
        assert_eq!(stored.company1, "NewParty");
        assert_eq!(stored.name, "");
        assert!(registry.contract_ids().unwrap().is_empty());
    }

    #[test]
    fn test_init_resets_index_and_writes_probe() {
        let registry = Registry::new(MemoryLedger::new());
        registry.create(contract("C1")).unwrap();
        registry.init(100).unwrap();

        assert!(registry.contract_ids().unwrap().is_empty());
        assert_eq!(registry.read_raw(INIT_PROBE_KEY).unwrap(), b"100");
    }

    #[test]
    fn test_store_errors_propagate() {
        let registry = Registry::new(FailingLedger);
        assert!(matches!(
            registry.create(contract("C1")),
            Err(Error::Store(_))
        ));
        assert!(matches!(registry.read_raw("C1"), Err(Error::Store(_))));
        assert!(matches!(registry.delete("C1"), Err(Error::Store(_))));
        assert!(matches!(
            registry.update_field("C1", ContractField::Title, "t"),
            Err(Error::Store(_))
        ));
        assert!(matches!(registry.init(0), Err(Error::Store(_))));
    }
}
