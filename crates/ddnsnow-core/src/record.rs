//! Record types exposed by the DDNS Now control panel
//!
//! The panel offers one slot per singleton kind (A, AAAA, CNAME) and a
//! newline-delimited list for the multi-value kinds (NS, TXT).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// DNS record kind
///
/// The declaration order is the order in which kinds are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4 address
    A,
    /// IPv6 address
    #[allow(clippy::upper_case_acronyms)]
    AAAA,
    /// Canonical name
    #[allow(clippy::upper_case_acronyms)]
    CNAME,
    /// Name server delegation
    NS,
    /// Free-form text
    #[allow(clippy::upper_case_acronyms)]
    TXT,
}

impl RecordKind {
    /// All kinds, in serialization order
    pub const ALL: [RecordKind; 5] = [
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::CNAME,
        RecordKind::NS,
        RecordKind::TXT,
    ];

    /// Singleton kinds hold at most one value
    pub fn is_singleton(self) -> bool {
        matches!(self, RecordKind::A | RecordKind::AAAA | RecordKind::CNAME)
    }

    /// The `id` of the form element holding this kind
    pub fn form_id(self) -> &'static str {
        match self {
            RecordKind::A => "update_data_a",
            RecordKind::AAAA => "update_data_aaaa",
            RecordKind::CNAME => "update_data_cname",
            RecordKind::NS => "update_data_ns",
            RecordKind::TXT => "update_data_txt",
        }
    }

    /// Map a form element `id` back to its kind
    pub fn from_form_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == id)
    }

    /// Upper-case name (e.g. "AAAA")
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::NS => "NS",
            RecordKind::TXT => "TXT",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_input(format!("unsupported record type: {}", s)))
    }
}

/// A single DNS entry as exposed by the control panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Record kind
    pub kind: RecordKind,
    /// Record value (address, target name or text)
    pub value: String,
}

impl Record {
    /// Create a new record
    pub fn new(kind: RecordKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}
