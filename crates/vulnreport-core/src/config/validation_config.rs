//! Post-extraction validation configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Run validation before aggregation. Default: true.
    pub enabled: Option<bool>,
    /// Report every violation instead of stopping at the first. Default: false.
    pub collect_all: Option<bool>,
    /// Require a non-empty policy block. Default: true.
    pub require_policy: Option<bool>,
    /// Warn about findings whose asset IP matches no asset. Default: true.
    pub check_asset_references: Option<bool>,
}

impl ValidationConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_collect_all(&self) -> bool {
        self.collect_all.unwrap_or(false)
    }

    pub fn effective_require_policy(&self) -> bool {
        self.require_policy.unwrap_or(true)
    }

    pub fn effective_check_asset_references(&self) -> bool {
        self.check_asset_references.unwrap_or(true)
    }
}
