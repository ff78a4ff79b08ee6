//! Contract record and field selector
//!
//! A contract is addressed on the ledger by its `name`. All fields are opaque
//! strings; no semantic validation is performed on dates or identifiers. The
//! serde field names are the wire encoding, so they stay lowercase and
//! unabbreviated.

use serde::{Deserialize, Serialize};

/// A contract record as stored on the ledger.
///
/// `Default` produces the zero-value record (all fields empty), which is what
/// an absent or malformed ledger entry decodes to. Existence checks compare
/// the decoded `name` against the requested identifier, so the zero-value
/// record never matches a real one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contract {
    /// Identifier; doubles as the ledger key
    pub name: String,
    /// Start date, opaque string
    pub startdate: String,
    /// End date, opaque string
    pub enddate: String,
    /// Location, opaque string
    pub location: String,
    /// Free-text body
    pub text: String,
    /// Party 1 identifier
    pub company1: String,
    /// Party 2 identifier
    pub company2: String,
    /// Title
    pub title: String,
}

impl Contract {
    /// Set the selected field to a new value.
    ///
    /// The identifier (`name`) is not selectable: updates never move a record
    /// to a different key.
    pub fn set_field(&mut self, field: ContractField, value: &str) {
        let slot = match field {
            ContractField::StartDate => &mut self.startdate,
            ContractField::EndDate => &mut self.enddate,
            ContractField::Location => &mut self.location,
            ContractField::Text => &mut self.text,
            ContractField::Company1 => &mut self.company1,
            ContractField::Company2 => &mut self.company2,
            ContractField::Title => &mut self.title,
        };
        *slot = value.to_string();
    }

    /// True if this is the zero-value record (all fields empty)
    pub fn is_empty(&self) -> bool {
        self == &Contract::default()
    }
}

/// Selector for single-field contract updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractField {
    /// Start date
    StartDate,
    /// End date
    EndDate,
    /// Location
    Location,
    /// Free-text body
    Text,
    /// Party 1 identifier
    Company1,
    /// Party 2 identifier
    Company2,
    /// Title
    Title,
}

impl ContractField {
    /// Wire name of the field this selector targets
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractField::StartDate => "startdate",
            ContractField::EndDate => "enddate",
            ContractField::Location => "location",
            ContractField::Text => "text",
            ContractField::Company1 => "company1",
            ContractField::Company2 => "company2",
            ContractField::Title => "title",
        }
    }
}
