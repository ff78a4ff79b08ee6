//! Output enum for command results.
//!
//! The router forwards a byte array back to its caller; every command maps
//! deterministically to one of the two shapes here.

use serde::{Deserialize, Serialize};

/// Successful command results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (init, write, delete, init_contract, set_user)
    Unit,

    /// Raw bytes (read); empty when the key was never written
    Bytes(Vec<u8>),
}

impl Output {
    /// The byte array the router forwards. `Unit` forwards nothing.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Output::Unit => Vec::new(),
            Output::Bytes(bytes) => bytes,
        }
    }
}
