//! Record codec: tolerant field-named encoding
//!
//! Records are encoded as field-named JSON rather than any positional or
//! concatenated format, so field values containing quotes or other special
//! characters round-trip intact.
//!
//! Decoding never fails: absent or malformed bytes decode to the zero-value
//! record. This lets "does this identifier exist" be answered as
//! `decode(bytes).name == expected` without a separate existence API on the
//! ledger, and it keeps reads working before anything was ever written.

use crate::contract::Contract;
use crate::error::Result;

/// Encode a contract for storage.
pub fn encode(contract: &Contract) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(contract)?)
}

/// Decode stored bytes into a contract.
///
/// Absent (empty) or malformed input decodes to the zero-value record.
/// Unknown fields are ignored; missing fields decode to empty strings.
pub fn decode(bytes: &[u8]) -> Contract {
    serde_json::from_slice(bytes).unwrap_or_default()
}

/// Decode an optional ledger value, treating `None` as absent.
pub fn decode_opt(bytes: Option<&[u8]>) -> Contract {
    decode(bytes.unwrap_or_default())
}
