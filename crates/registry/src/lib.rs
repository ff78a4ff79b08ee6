//! Contract registry over a single-key ledger
//!
//! ## Design
//!
//! The registry composes the record codec, the index manager and a
//! [`LedgerStore`](pactdb_core::LedgerStore) into create / read / update-field
//! / delete operations. The only real invariant lives here: the persisted
//! index of identifiers must stay consistent with the set of live records,
//! even though the ledger offers no multi-key transactions.
//!
//! ## Serialization precondition
//!
//! The hosting ledger platform applies invocations one at a time, in an order
//! it determines. The registry performs no locking of its own and caches no
//! state across invocations; the host's total ordering is a hard precondition
//! of correctness. See [`Registry`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod registry;
pub mod testing;

pub use index::{ContractIndex, INDEX_KEY};
pub use registry::{Registry, INIT_PROBE_KEY};
