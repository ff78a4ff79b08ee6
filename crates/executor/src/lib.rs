//! Command execution layer for PactDB
//!
//! The hosting platform's router hands this crate a verb and a list of
//! positional string arguments; it parses them into a [`Command`], dispatches
//! to the registry, and hands back bytes (or an error) for the router to
//! forward. The layer is deliberately thin - all semantics live in
//! `pactdb-registry`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod error;
pub mod executor;
pub mod output;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;

// Re-export the types callers need to build and inspect commands
pub use pactdb_core::{Contract, ContractField, LedgerScan, LedgerStore};
pub use pactdb_registry::{Registry, INDEX_KEY, INIT_PROBE_KEY};
