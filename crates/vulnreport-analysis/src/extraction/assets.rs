use vulnreport_core::types::Asset;

use super::fields::ASSET_FIELDS;
use crate::document::XmlElement;

/// One asset per host element, never merged, even when IPs repeat.
pub(crate) fn extract_asset(host: &XmlElement) -> Asset {
    let field = |name: &str| ASSET_FIELDS.resolve(name, host);

    Asset {
        ip: field("asset_ip"),
        hostname: field("hostname"),
        os: field("os"),
        mac_address: field("mac_address"),
        start_time: field("start_time"),
        end_time: field("end_time"),
        fqdn: field("fqdn"),
        system_type: field("system_type"),
        network: field("network"),
    }
}
