use vulnreport_core::constants::{
    PLUGIN_PREFERENCES_ELEMENT, PLUGIN_PREFERENCE_ELEMENT, PREFERENCES_ELEMENT,
    SERVER_PREFERENCES_ELEMENT, SERVER_PREFERENCE_ELEMENT,
};
use vulnreport_core::events::types::StructuralAbsenceEvent;
use vulnreport_core::types::{PluginPreference, PolicyInfo, PolicyRecords, ServerPreference};
use vulnreport_core::{DiagnosticEvent, EventDispatcher};

use super::fields::{PLUGIN_PREFERENCE_FIELDS, POLICY_INFO_FIELDS, SERVER_PREFERENCE_FIELDS};
use crate::document::XmlElement;

/// Policy info plus both preference lists. A policy without a preferences
/// block still yields its info record.
pub(crate) fn extract_policy(policy: &XmlElement, dispatcher: &EventDispatcher) -> PolicyRecords {
    let info = PolicyInfo {
        policy_name: POLICY_INFO_FIELDS.resolve("policy_name", policy),
        policy_comment: POLICY_INFO_FIELDS.resolve("policy_comment", policy),
    };

    let Some(preferences) = policy.child(PREFERENCES_ELEMENT) else {
        dispatcher.record(&DiagnosticEvent::StructuralAbsence(StructuralAbsenceEvent {
            container: PREFERENCES_ELEMENT,
            context: "policy".to_string(),
        }));
        return PolicyRecords {
            info: vec![info],
            ..Default::default()
        };
    };

    let server_preferences = preferences
        .child(SERVER_PREFERENCES_ELEMENT)
        .map(|server| {
            server
                .children_named(SERVER_PREFERENCE_ELEMENT)
                .map(extract_server_preference)
                .collect()
        })
        .unwrap_or_default();

    let plugin_preferences = preferences
        .child(PLUGIN_PREFERENCES_ELEMENT)
        .map(|plugins| {
            plugins
                .children_named(PLUGIN_PREFERENCE_ELEMENT)
                .map(extract_plugin_preference)
                .collect()
        })
        .unwrap_or_default();

    PolicyRecords {
        info: vec![info],
        server_preferences,
        plugin_preferences,
    }
}

fn extract_server_preference(element: &XmlElement) -> ServerPreference {
    let field = |name: &str| SERVER_PREFERENCE_FIELDS.resolve(name, element);
    ServerPreference {
        name: field("name"),
        value: field("value"),
    }
}

fn extract_plugin_preference(element: &XmlElement) -> PluginPreference {
    let field = |name: &str| PLUGIN_PREFERENCE_FIELDS.resolve(name, element);
    PluginPreference {
        plugin_name: field("plugin_name"),
        plugin_id: field("plugin_id"),
        full_name: field("full_name"),
        preference_name: field("preference_name"),
        preference_type: field("preference_type"),
        preference_values: field("preference_values"),
        selected_value: field("selected_value"),
    }
}
