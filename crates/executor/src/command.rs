//! Command enum for the invocation surface.
//!
//! Commands are pure data: self-contained, serializable, no closures. The
//! router speaks (verb, positional string args); [`Command::parse`] is the
//! single place that surface is validated. Argument counts are checked first,
//! before anything touches the store.

use serde::{Deserialize, Serialize};

use pactdb_core::Contract;

use crate::error::{Error, Result};

/// A parsed invocation.
///
/// | Verb | Args | Variant |
/// |------|------|---------|
/// | `init` | [initial-counter] | `Init` |
/// | `write` | [key, value] | `Write` |
/// | `read` | [key] | `Read` |
/// | `delete` | [key] | `Delete` |
/// | `init_contract` | [id, startdate, enddate, location, text, company1, company2, title] | `InitContract` |
/// | `set_user` | [id, new-company1] | `SetUser` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Reset the registry; writes the probe key and empties the index.
    /// Returns: `Output::Unit`
    Init {
        /// Initial counter written to the probe key
        counter: i64,
    },

    /// Raw key/value passthrough write.
    /// Returns: `Output::Unit`
    Write {
        /// Caller-chosen key
        key: String,
        /// Value stored as-is
        value: String,
    },

    /// Raw bytes at a key; absent keys yield empty bytes.
    /// Returns: `Output::Bytes`
    Read {
        /// Key to read
        key: String,
    },

    /// Delete a record and unindex it; idempotent.
    /// Returns: `Output::Unit`
    Delete {
        /// Identifier (or raw key) to delete
        key: String,
    },

    /// Create a contract; fails if the identifier is live.
    /// Returns: `Output::Unit`
    InitContract {
        /// The fully assembled record
        contract: Contract,
    },

    /// Change a contract's party-1 identifier (upserts when absent).
    /// Returns: `Output::Unit`
    SetUser {
        /// Contract identifier
        id: String,
        /// New party-1 value
        company1: String,
    },
}

impl Command {
    /// Parse a verb and positional arguments into a command.
    ///
    /// Argument counts are validated here, before any store access. `init`'s
    /// argument must additionally parse as an integer.
    pub fn parse(function: &str, args: &[String]) -> Result<Command> {
        match function {
            "init" => {
                expect_args(function, args, 1)?;
                let counter = args[0].parse().map_err(|_| Error::InvalidCounter)?;
                Ok(Command::Init { counter })
            }
            "write" => {
                expect_args(function, args, 2)?;
                Ok(Command::Write {
                    key: args[0].clone(),
                    value: args[1].clone(),
                })
            }
            "read" => {
                expect_args(function, args, 1)?;
                Ok(Command::Read {
                    key: args[0].clone(),
                })
            }
            "delete" => {
                expect_args(function, args, 1)?;
                Ok(Command::Delete {
                    key: args[0].clone(),
                })
            }
            "init_contract" => {
                expect_args(function, args, 8)?;
                Ok(Command::InitContract {
                    contract: Contract {
                        name: args[0].clone(),
                        startdate: args[1].clone(),
                        enddate: args[2].clone(),
                        location: args[3].clone(),
                        text: args[4].clone(),
                        company1: args[5].clone(),
                        company2: args[6].clone(),
                        title: args[7].clone(),
                    },
                })
            }
            "set_user" => {
                expect_args(function, args, 2)?;
                Ok(Command::SetUser {
                    id: args[0].clone(),
                    company1: args[1].clone(),
                })
            }
            other => Err(Error::UnknownFunction(other.to_string())),
        }
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::ArgumentCount {
            function: function.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}
