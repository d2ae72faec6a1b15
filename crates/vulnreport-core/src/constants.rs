//! Shared constants for the vulnreport engine.

/// vulnreport version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel written in place of an absent value at the serialization boundary.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default number of entries kept in top-N rankings.
pub const DEFAULT_TOP_N: usize = 5;

/// An asset with more than this many unique critical findings is high-risk.
pub const DEFAULT_HIGH_RISK_THRESHOLD: usize = 3;

/// Project-level configuration file name.
pub const CONFIG_FILE_NAME: &str = "vulnreport.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "VULNREPORT_LOG";

/// Filter used when `VULNREPORT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "vulnreport=info";

// ---- Document element names ----

pub const REPORT_ELEMENT: &str = "Report";
pub const HOST_ELEMENT: &str = "ReportHost";
pub const HOST_PROPERTIES_ELEMENT: &str = "HostProperties";
pub const PROPERTY_TAG_ELEMENT: &str = "tag";
pub const ITEM_ELEMENT: &str = "ReportItem";
pub const POLICY_ELEMENT: &str = "Policy";
pub const PREFERENCES_ELEMENT: &str = "Preferences";
pub const SERVER_PREFERENCES_ELEMENT: &str = "ServerPreferences";
pub const SERVER_PREFERENCE_ELEMENT: &str = "preference";
pub const PLUGIN_PREFERENCES_ELEMENT: &str = "PluginsPreferences";
pub const PLUGIN_PREFERENCE_ELEMENT: &str = "item";
