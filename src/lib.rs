//! PactDB - contract registry over an external append-only key-value ledger
//!
//! PactDB keeps a primary record store and a derived index of identifiers
//! mutually consistent on top of a ledger that offers only single-key
//! get/put/delete. The hosting platform serializes invocations; see
//! `pactdb_registry::Registry` for the consistency model.
//!
//! # Quick Start
//!
//! ```ignore
//! use pactdb::{Executor, Output};
//! use pactdb_registry::testing::MemoryLedger;
//!
//! let exec = Executor::new(MemoryLedger::new());
//! exec.invoke("init", &["0".to_string()])?;
//! exec.invoke("init_contract", &args)?;
//! let bytes = exec.invoke("read", &[id])?.into_bytes();
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which parses the router's
//! (verb, args) surface into [`Command`]s and dispatches to the registry.
//! Only the executor API is re-exported here; hosts that need the registry
//! directly can depend on `pactdb-registry`.

// Re-export the public API from pactdb-executor
pub use pactdb_executor::*;
