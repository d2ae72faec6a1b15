//! Record extraction configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Keep raw `plugin_output` text on findings. Default: true.
    pub include_plugin_output: Option<bool>,
    /// Extract `cm:compliance-*` sub-fields. Default: true.
    pub include_compliance: Option<bool>,
}

impl ExtractionConfig {
    pub fn effective_include_plugin_output(&self) -> bool {
        self.include_plugin_output.unwrap_or(true)
    }

    pub fn effective_include_compliance(&self) -> bool {
        self.include_compliance.unwrap_or(true)
    }
}
