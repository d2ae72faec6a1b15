//! Record kinds and by-name field presence for schema-driven validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The record collections produced by extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Metadata,
    Asset,
    Finding,
    PolicyInfo,
    ServerPreference,
    PluginPreference,
}

impl RecordKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Asset => "assets",
            Self::Finding => "findings",
            Self::PolicyInfo => "policy info",
            Self::ServerPreference => "server preferences",
            Self::PluginPreference => "plugin preferences",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record whose logical fields can be checked by name.
///
/// Field names are the ones declared in the extraction field tables, so a
/// validator can walk a table's required entries against any record.
pub trait FieldRecord {
    const KIND: RecordKind;

    /// Returns true when the named field resolved to a value during extraction.
    /// Unknown names return false.
    fn has_value(&self, field: &str) -> bool;
}
