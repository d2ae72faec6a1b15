//! Vulnerability findings: one per (host, plugin result) pair.

use serde::{Deserialize, Serialize};

use super::record::{FieldRecord, RecordKind};
use super::Severity;

/// A single plugin result against a single host.
///
/// A finding has no identity of its own beyond [`FindingIdentity`]; the same
/// plugin may legitimately fire several times per host on different ports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Finding {
    /// Owning asset, a foreign key into the asset collection.
    #[serde(with = "super::sentinel", default)]
    pub asset_ip: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub plugin_id: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub plugin_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub plugin_family: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(with = "super::sentinel", default)]
    pub port: Option<u16>,
    #[serde(with = "super::sentinel", default)]
    pub protocol: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub service_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub description: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub solution: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub synopsis: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub risk_factor: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub plugin_type: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub cvss_base_score: Option<f64>,
    #[serde(with = "super::sentinel", default)]
    pub cvss_temporal_score: Option<f64>,
    #[serde(with = "super::sentinel", default)]
    pub cvss_vector: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub cvss3_base_score: Option<f64>,
    #[serde(with = "super::sentinel", default)]
    pub cvss3_vector: Option<String>,
    #[serde(default)]
    pub exploit: ExploitInfo,
    #[serde(default)]
    pub dates: PluginDates,
    #[serde(default)]
    pub references: References,
    #[serde(with = "super::sentinel", default)]
    pub plugin_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceCheck>,
}

/// Exploit availability, generic and per framework.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExploitInfo {
    #[serde(with = "super::sentinel", default)]
    pub available: Option<bool>,
    #[serde(with = "super::sentinel", default)]
    pub metasploit: Option<bool>,
    #[serde(with = "super::sentinel", default)]
    pub canvas: Option<bool>,
    #[serde(with = "super::sentinel", default)]
    pub core: Option<bool>,
    #[serde(with = "super::sentinel", default)]
    pub ease: Option<String>,
}

impl ExploitInfo {
    /// True when any source reports a usable exploit.
    pub fn any_available(&self) -> bool {
        [self.available, self.metasploit, self.canvas, self.core]
            .iter()
            .any(|flag| *flag == Some(true))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginDates {
    #[serde(with = "super::sentinel", default)]
    pub plugin_publication: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub plugin_modification: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub vuln_publication: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub patch_publication: Option<String>,
}

/// Cross-reference identifiers. Repeated elements keep source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct References {
    #[serde(default)]
    pub cve: Vec<String>,
    #[serde(default)]
    pub bid: Vec<String>,
    #[serde(default)]
    pub xref: Vec<String>,
    #[serde(default)]
    pub see_also: Vec<String>,
}

/// Compliance audit sub-fields, present only on compliance check results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceCheck {
    #[serde(with = "super::sentinel", default)]
    pub check_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub check_id: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub result: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub actual_value: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub policy_value: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub info: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub solution: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub reference: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub audit_file: Option<String>,
}

impl ComplianceCheck {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// (plugin id, asset ip, port, protocol), borrowed from the finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FindingIdentity<'a> {
    pub plugin_id: Option<&'a str>,
    pub asset_ip: Option<&'a str>,
    pub port: Option<u16>,
    pub protocol: Option<&'a str>,
}

/// (plugin id, asset ip): one unique vulnerability per check per host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupKey<'a> {
    pub plugin_id: Option<&'a str>,
    pub asset_ip: Option<&'a str>,
}

impl Finding {
    pub fn identity(&self) -> FindingIdentity<'_> {
        FindingIdentity {
            plugin_id: self.plugin_id.as_deref(),
            asset_ip: self.asset_ip.as_deref(),
            port: self.port,
            protocol: self.protocol.as_deref(),
        }
    }

    pub fn dedup_key(&self) -> DedupKey<'_> {
        DedupKey {
            plugin_id: self.plugin_id.as_deref(),
            asset_ip: self.asset_ip.as_deref(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl FieldRecord for Finding {
    const KIND: RecordKind = RecordKind::Finding;

    fn has_value(&self, field: &str) -> bool {
        match field {
            "asset_ip" => self.asset_ip.is_some(),
            "plugin_id" => self.plugin_id.is_some(),
            "plugin_name" => self.plugin_name.is_some(),
            "plugin_family" => self.plugin_family.is_some(),
            // Severity always resolves, falling back to informational.
            "severity" => true,
            "port" => self.port.is_some(),
            "protocol" => self.protocol.is_some(),
            "service_name" => self.service_name.is_some(),
            "description" => self.description.is_some(),
            "solution" => self.solution.is_some(),
            "synopsis" => self.synopsis.is_some(),
            "risk_factor" => self.risk_factor.is_some(),
            "plugin_type" => self.plugin_type.is_some(),
            "cvss_base_score" => self.cvss_base_score.is_some(),
            "cvss_temporal_score" => self.cvss_temporal_score.is_some(),
            "cvss_vector" => self.cvss_vector.is_some(),
            "cvss3_base_score" => self.cvss3_base_score.is_some(),
            "cvss3_vector" => self.cvss3_vector.is_some(),
            "exploit_available" => self.exploit.available.is_some(),
            "exploit_framework_metasploit" => self.exploit.metasploit.is_some(),
            "exploit_framework_canvas" => self.exploit.canvas.is_some(),
            "exploit_framework_core" => self.exploit.core.is_some(),
            "exploitability_ease" => self.exploit.ease.is_some(),
            "plugin_publication_date" => self.dates.plugin_publication.is_some(),
            "plugin_modification_date" => self.dates.plugin_modification.is_some(),
            "vuln_publication_date" => self.dates.vuln_publication.is_some(),
            "patch_publication_date" => self.dates.patch_publication.is_some(),
            "cve" => !self.references.cve.is_empty(),
            "bid" => !self.references.bid.is_empty(),
            "xref" => !self.references.xref.is_empty(),
            "see_also" => !self.references.see_also.is_empty(),
            "plugin_output" => self.plugin_output.is_some(),
            _ => false,
        }
    }
}
