//! Scanner policy configuration records.

use serde::{Deserialize, Serialize};

use super::record::{FieldRecord, RecordKind};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyInfo {
    #[serde(with = "super::sentinel", default)]
    pub policy_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub policy_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerPreference {
    #[serde(with = "super::sentinel", default)]
    pub name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginPreference {
    #[serde(with = "super::sentinel", default)]
    pub plugin_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub plugin_id: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub full_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub preference_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub preference_type: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub preference_values: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub selected_value: Option<String>,
}

/// The optional policy block. All three collections are empty when the
/// document carries no policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyRecords {
    pub info: Vec<PolicyInfo>,
    pub server_preferences: Vec<ServerPreference>,
    pub plugin_preferences: Vec<PluginPreference>,
}

impl PolicyRecords {
    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
            && self.server_preferences.is_empty()
            && self.plugin_preferences.is_empty()
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.info.first().and_then(|p| p.policy_name.as_deref())
    }
}

impl FieldRecord for PolicyInfo {
    const KIND: RecordKind = RecordKind::PolicyInfo;

    fn has_value(&self, field: &str) -> bool {
        match field {
            "policy_name" => self.policy_name.is_some(),
            "policy_comment" => self.policy_comment.is_some(),
            _ => false,
        }
    }
}

impl FieldRecord for ServerPreference {
    const KIND: RecordKind = RecordKind::ServerPreference;

    fn has_value(&self, field: &str) -> bool {
        match field {
            "name" => self.name.is_some(),
            "value" => self.value.is_some(),
            _ => false,
        }
    }
}

impl FieldRecord for PluginPreference {
    const KIND: RecordKind = RecordKind::PluginPreference;

    fn has_value(&self, field: &str) -> bool {
        match field {
            "plugin_name" => self.plugin_name.is_some(),
            "plugin_id" => self.plugin_id.is_some(),
            "full_name" => self.full_name.is_some(),
            "preference_name" => self.preference_name.is_some(),
            "preference_type" => self.preference_type.is_some(),
            "preference_values" => self.preference_values.is_some(),
            "selected_value" => self.selected_value.is_some(),
            _ => false,
        }
    }
}
