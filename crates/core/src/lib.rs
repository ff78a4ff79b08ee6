//! Core types and traits for PactDB
//!
//! This crate defines the foundational pieces shared by the registry and
//! executor layers:
//! - Contract: the record type stored on the ledger
//! - ContractField: selector for single-field updates
//! - codec: the tolerant record encoding (decode never fails)
//! - LedgerStore / LedgerScan: the ledger abstraction the registry is built on
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod contract;
pub mod error;
pub mod traits;

pub use contract::{Contract, ContractField};
pub use error::{Error, Result};
pub use traits::{LedgerScan, LedgerStore};
