//! Scanned host records.

use serde::{Deserialize, Serialize};

use super::record::{FieldRecord, RecordKind};

/// One per host entry in the document, keyed by IP. Hosts are never merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "asset_ip", with = "super::sentinel", default)]
    pub ip: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub hostname: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub os: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub mac_address: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub start_time: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub end_time: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub fqdn: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub system_type: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub network: Option<String>,
}

impl Asset {
    pub fn with_ip(ip: impl Into<String>) -> Self {
        Self {
            ip: Some(ip.into()),
            ..Default::default()
        }
    }
}

impl FieldRecord for Asset {
    const KIND: RecordKind = RecordKind::Asset;

    fn has_value(&self, field: &str) -> bool {
        match field {
            "asset_ip" => self.ip.is_some(),
            "hostname" => self.hostname.is_some(),
            "os" => self.os.is_some(),
            "mac_address" => self.mac_address.is_some(),
            "start_time" => self.start_time.is_some(),
            "end_time" => self.end_time.is_some(),
            "fqdn" => self.fqdn.is_some(),
            "system_type" => self.system_type.is_some(),
            "network" => self.network.is_some(),
            _ => false,
        }
    }
}
