//! Declarative field tables: logical field name → document location,
//! default, and whether validation requires it.
//!
//! Extraction resolves every record field through these tables, and the
//! validator reads the `required` flags from the same tables, so the two can
//! never disagree about a field's name.

use vulnreport_core::constants::{HOST_PROPERTIES_ELEMENT, PROPERTY_TAG_ELEMENT};
use vulnreport_core::types::RecordKind;

use crate::document::XmlElement;

/// Where a field's raw text lives, relative to the element it is resolved
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    /// An attribute on the element itself.
    Attribute(&'static str),
    /// Text of the first direct child with this name.
    ChildText(&'static str),
    /// Text of the first direct child matching any of these names, tried in order.
    ChildTextAny(&'static [&'static str]),
    /// Text of every direct child with this name (repeated elements).
    ChildTexts(&'static str),
    /// Text of the `HostProperties/tag` whose `name` attribute matches.
    PropertyTag(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub location: FieldLocation,
    /// Used when the location is absent. A present-but-empty value is kept.
    pub default: Option<&'static str>,
    pub required: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, location: FieldLocation) -> Self {
        Self {
            name,
            location,
            default: None,
            required: false,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn or_default(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Resolve a single value. Repeated locations yield their first entry.
    pub fn resolve(&self, element: &XmlElement) -> Option<String> {
        let raw = match self.location {
            FieldLocation::Attribute(name) => element.attribute(name),
            FieldLocation::ChildText(name) | FieldLocation::ChildTexts(name) => {
                element.child_text(name)
            }
            FieldLocation::ChildTextAny(names) => names.iter().find_map(|n| element.child_text(n)),
            FieldLocation::PropertyTag(name) => property_tag(element, name),
        };
        raw.map(str::to_string)
            .or_else(|| self.default.map(str::to_string))
    }

    /// Resolve every value, in source order. Single-valued locations yield at
    /// most one entry.
    pub fn resolve_all(&self, element: &XmlElement) -> Vec<String> {
        match self.location {
            FieldLocation::ChildTexts(name) => element
                .children_named(name)
                .map(|c| c.text().to_string())
                .collect(),
            _ => self.resolve(element).into_iter().collect(),
        }
    }
}

/// Looks up `HostProperties/tag[@name]` under a host element.
fn property_tag<'a>(host: &'a XmlElement, name: &str) -> Option<&'a str> {
    host.child(HOST_PROPERTIES_ELEMENT)?
        .children_named(PROPERTY_TAG_ELEMENT)
        .find(|tag| tag.attribute("name") == Some(name))
        .map(XmlElement::text)
}

/// All field specs for one record kind.
#[derive(Debug)]
pub struct FieldTable {
    pub kind: RecordKind,
    pub specs: &'static [FieldSpec],
}

impl FieldTable {
    pub fn spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    pub fn required(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.specs.iter().filter(|s| s.required)
    }

    /// Resolve a declared field by name. Undeclared names resolve to `None`.
    pub fn resolve(&self, name: &str, element: &XmlElement) -> Option<String> {
        debug_assert!(self.spec(name).is_some(), "undeclared {} field `{name}`", self.kind);
        self.spec(name).and_then(|s| s.resolve(element))
    }

    pub fn resolve_all(&self, name: &str, element: &XmlElement) -> Vec<String> {
        debug_assert!(self.spec(name).is_some(), "undeclared {} field `{name}`", self.kind);
        self.spec(name).map(|s| s.resolve_all(element)).unwrap_or_default()
    }
}

use FieldLocation::{Attribute, ChildText, ChildTextAny, ChildTexts, PropertyTag};

/// `scan_name` resolves against the report element, `scan_start`/`scan_end`
/// against the first host, and the policy fields against the policy element
/// and first host respectively.
pub static METADATA_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::Metadata,
    specs: &[
        FieldSpec::new("scan_name", Attribute("name")).required(),
        FieldSpec::new("scan_start", PropertyTag("HOST_START")).required(),
        FieldSpec::new("scan_end", PropertyTag("HOST_END")).required(),
        FieldSpec::new("policy_name", ChildText("policyName")),
        FieldSpec::new("policy_used", PropertyTag("policy-used")),
    ],
};

pub static ASSET_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::Asset,
    specs: &[
        FieldSpec::new("asset_ip", Attribute("name")).required(),
        FieldSpec::new("hostname", PropertyTag("netbios-name")),
        FieldSpec::new("os", PropertyTag("operating-system")),
        FieldSpec::new("mac_address", PropertyTag("mac-address")),
        FieldSpec::new("start_time", PropertyTag("HOST_START")),
        FieldSpec::new("end_time", PropertyTag("HOST_END")),
        FieldSpec::new("fqdn", PropertyTag("host-fqdn")),
        FieldSpec::new("system_type", PropertyTag("system-type")),
        FieldSpec::new("network", PropertyTag("host-network")),
    ],
};

/// `asset_ip` is inherited from the owning host, not resolved from the item.
pub static FINDING_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::Finding,
    specs: &[
        FieldSpec::new("asset_ip", Attribute("name")),
        FieldSpec::new("plugin_id", Attribute("pluginID")).required(),
        FieldSpec::new("plugin_name", Attribute("pluginName")),
        FieldSpec::new("plugin_family", Attribute("pluginFamily")),
        FieldSpec::new("severity", Attribute("severity")).or_default("0"),
        FieldSpec::new("port", Attribute("port")),
        FieldSpec::new("protocol", Attribute("protocol")),
        FieldSpec::new("service_name", Attribute("svc_name")),
        FieldSpec::new("description", ChildText("description")).required(),
        FieldSpec::new("solution", ChildText("solution")),
        FieldSpec::new("synopsis", ChildText("synopsis")),
        FieldSpec::new("risk_factor", ChildText("risk_factor")),
        FieldSpec::new("plugin_type", ChildText("plugin_type")),
        FieldSpec::new("cvss_base_score", ChildText("cvss_base_score")),
        FieldSpec::new("cvss_temporal_score", ChildText("cvss_temporal_score")),
        FieldSpec::new("cvss_vector", ChildText("cvss_vector")),
        FieldSpec::new("cvss3_base_score", ChildText("cvss3_base_score")),
        FieldSpec::new("cvss3_vector", ChildText("cvss3_vector")),
        FieldSpec::new("exploit_available", ChildText("exploit_available")),
        FieldSpec::new("exploit_framework_metasploit", ChildText("exploit_framework_metasploit")),
        FieldSpec::new("exploit_framework_canvas", ChildText("exploit_framework_canvas")),
        FieldSpec::new("exploit_framework_core", ChildText("exploit_framework_core")),
        FieldSpec::new("exploitability_ease", ChildText("exploitability_ease")),
        FieldSpec::new("plugin_publication_date", ChildText("plugin_publication_date")),
        FieldSpec::new("plugin_modification_date", ChildText("plugin_modification_date")),
        FieldSpec::new("vuln_publication_date", ChildText("vuln_publication_date")),
        FieldSpec::new("patch_publication_date", ChildText("patch_publication_date")),
        FieldSpec::new("cve", ChildTexts("cve")),
        FieldSpec::new("bid", ChildTexts("bid")),
        FieldSpec::new("xref", ChildTexts("xref")),
        FieldSpec::new("see_also", ChildTexts("see_also")),
        FieldSpec::new("plugin_output", ChildText("plugin_output")),
    ],
};

/// Compliance sub-fields of a finding, under the `cm:` prefix.
pub static COMPLIANCE_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::Finding,
    specs: &[
        FieldSpec::new("check_name", ChildText("cm:compliance-check-name")),
        FieldSpec::new("check_id", ChildText("cm:compliance-check-id")),
        FieldSpec::new("result", ChildText("cm:compliance-result")),
        FieldSpec::new("actual_value", ChildText("cm:compliance-actual-value")),
        FieldSpec::new("policy_value", ChildText("cm:compliance-policy-value")),
        FieldSpec::new("info", ChildText("cm:compliance-info")),
        FieldSpec::new("solution", ChildText("cm:compliance-solution")),
        FieldSpec::new("reference", ChildText("cm:compliance-reference")),
        FieldSpec::new("audit_file", ChildText("cm:compliance-audit-file")),
    ],
};

pub static POLICY_INFO_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::PolicyInfo,
    specs: &[
        FieldSpec::new("policy_name", ChildText("policyName")).required(),
        FieldSpec::new("policy_comment", ChildTextAny(&["policyComments", "policyComment"])),
    ],
};

pub static SERVER_PREFERENCE_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::ServerPreference,
    specs: &[
        FieldSpec::new("name", ChildText("name")),
        FieldSpec::new("value", ChildText("value")),
    ],
};

pub static PLUGIN_PREFERENCE_FIELDS: FieldTable = FieldTable {
    kind: RecordKind::PluginPreference,
    specs: &[
        FieldSpec::new("plugin_name", ChildText("pluginName")),
        FieldSpec::new("plugin_id", ChildText("pluginId")),
        FieldSpec::new("full_name", ChildText("fullName")),
        FieldSpec::new("preference_name", ChildText("preferenceName")),
        FieldSpec::new("preference_type", ChildText("preferenceType")),
        FieldSpec::new("preference_values", ChildText("preferenceValues")),
        FieldSpec::new("selected_value", ChildText("selectedValue")),
    ],
};

/// The table whose `required` flags govern validation of `kind`.
pub fn table_for(kind: RecordKind) -> &'static FieldTable {
    match kind {
        RecordKind::Metadata => &METADATA_FIELDS,
        RecordKind::Asset => &ASSET_FIELDS,
        RecordKind::Finding => &FINDING_FIELDS,
        RecordKind::PolicyInfo => &POLICY_INFO_FIELDS,
        RecordKind::ServerPreference => &SERVER_PREFERENCE_FIELDS,
        RecordKind::PluginPreference => &PLUGIN_PREFERENCE_FIELDS,
    }
}
