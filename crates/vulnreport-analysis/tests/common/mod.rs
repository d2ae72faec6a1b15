#![allow(dead_code)]

use std::sync::Arc;

use vulnreport_core::config::VulnReportConfig;
use vulnreport_core::events::CollectingHandler;
use vulnreport_core::EventDispatcher;

/// Two hosts, a policy block, compliance and informational items.
pub const FULL_REPORT: &str = r#"<?xml version="1.0" ?>
<NessusClientData_v2 xmlns:cm="http://www.nessus.org/cm">
  <Policy>
    <policyName>Internal Audit</policyName>
    <policyComments>Quarterly sweep</policyComments>
    <Preferences>
      <ServerPreferences>
        <preference><name>max_hosts</name><value>30</value></preference>
        <preference><name>safe_checks</name><value>yes</value></preference>
      </ServerPreferences>
      <PluginsPreferences>
        <item>
          <pluginName>Ping the remote host</pluginName>
          <pluginId>10180</pluginId>
          <fullName>Ping the remote host[checkbox]:TCP ping</fullName>
          <preferenceName>TCP ping</preferenceName>
          <preferenceType>checkbox</preferenceType>
          <preferenceValues>yes</preferenceValues>
          <selectedValue>yes</selectedValue>
        </item>
      </PluginsPreferences>
    </Preferences>
  </Policy>
  <Report name="Weekly Scan">
    <ReportHost name="10.0.0.1">
      <HostProperties>
        <tag name="HOST_END">Tue Jan 2 11:00:00 2024</tag>
        <tag name="HOST_START">Tue Jan 2 10:00:00 2024</tag>
        <tag name="netbios-name">WEB01</tag>
        <tag name="operating-system">Microsoft Windows Server 2019</tag>
        <tag name="mac-address">00:11:22:33:44:55</tag>
        <tag name="host-fqdn">web01.example.com</tag>
        <tag name="system-type">general-purpose</tag>
        <tag name="host-network">10.0.0.0/24</tag>
      </HostProperties>
      <ReportItem port="445" svc_name="cifs" protocol="tcp" severity="4" pluginID="97833" pluginName="MS17-010" pluginFamily="Windows">
        <description>The remote host is affected by multiple vulnerabilities.</description>
        <solution>Apply the patches.</solution>
        <synopsis>The remote host is missing a security update.</synopsis>
        <risk_factor>Critical</risk_factor>
        <plugin_type>remote</plugin_type>
        <cvss_base_score>10.0</cvss_base_score>
        <cvss_temporal_score>8.7</cvss_temporal_score>
        <cvss_vector>CVSS2#AV:N/AC:L/Au:N/C:C/I:C/A:C</cvss_vector>
        <cvss3_base_score>8.1</cvss3_base_score>
        <cvss3_vector>CVSS:3.0/AV:N/AC:H/PR:N/UI:N/S:U/C:H/I:H/A:H</cvss3_vector>
        <exploit_available>true</exploit_available>
        <exploit_framework_metasploit>true</exploit_framework_metasploit>
        <exploit_framework_canvas>false</exploit_framework_canvas>
        <exploitability_ease>Exploits are available</exploitability_ease>
        <plugin_publication_date>2017/03/14</plugin_publication_date>
        <plugin_modification_date>2022/05/25</plugin_modification_date>
        <vuln_publication_date>2017/03/14</vuln_publication_date>
        <patch_publication_date>2017/03/14</patch_publication_date>
        <cve>CVE-2017-0143</cve>
        <cve>CVE-2017-0144</cve>
        <bid>96703</bid>
        <xref>MSFT:MS17-010</xref>
        <see_also>https://example.com/ms17-010</see_also>
        <plugin_output>Host is vulnerable &amp; unpatched</plugin_output>
      </ReportItem>
      <ReportItem port="445" svc_name="cifs" protocol="udp" severity="4" pluginID="97833" pluginName="MS17-010" pluginFamily="Windows">
        <description>The remote host is affected by multiple vulnerabilities.</description>
      </ReportItem>
      <ReportItem port="0" svc_name="general" protocol="tcp" severity="0" pluginID="19506" pluginName="Nessus Scan Information" pluginFamily="Settings">
        <description>Information about the scan.</description>
      </ReportItem>
      <ReportItem port="0" svc_name="general" protocol="tcp" severity="1" pluginID="21156" pluginName="Windows Compliance Checks" pluginFamily="Policy Compliance">
        <description>Compliance check.</description>
        <cm:compliance-check-name>1.1 Password history</cm:compliance-check-name>
        <cm:compliance-result>FAILED</cm:compliance-result>
        <cm:compliance-actual-value>0</cm:compliance-actual-value>
        <cm:compliance-policy-value>24</cm:compliance-policy-value>
      </ReportItem>
    </ReportHost>
    <ReportHost name="10.0.0.2">
      <HostProperties>
        <tag name="HOST_START">Tue Jan 2 10:05:00 2024</tag>
        <tag name="HOST_END">Tue Jan 2 10:30:00 2024</tag>
        <tag name="operating-system">Linux Kernel 5.4</tag>
      </HostProperties>
      <ReportItem port="22" svc_name="ssh" protocol="tcp" severity="2" pluginID="70658" pluginName="SSH Weak Algorithms" pluginFamily="Misc.">
        <description>Weak algorithms supported.</description>
      </ReportItem>
      <ReportItem port="443" svc_name="www" protocol="tcp" severity="3" pluginID="42873" pluginName="SSL Medium Strength Ciphers" pluginFamily="General">
        <description>Medium strength ciphers.</description>
      </ReportItem>
    </ReportHost>
  </Report>
</NessusClientData_v2>
"#;

/// One host, plugin 19506 twice at severity 0 and plugin 11219 once at severity 4.
pub const SCENARIO_A: &str = r#"<NessusClientData_v2>
  <Policy><policyName>Basic</policyName></Policy>
  <Report name="Scenario A">
    <ReportHost name="10.0.0.1">
      <HostProperties>
        <tag name="HOST_START">start</tag>
        <tag name="HOST_END">end</tag>
      </HostProperties>
      <ReportItem port="80" protocol="tcp" severity="0" pluginID="19506" pluginName="Nessus Scan Information" pluginFamily="Settings">
        <description>info</description>
      </ReportItem>
      <ReportItem port="443" protocol="tcp" severity="0" pluginID="19506" pluginName="Nessus Scan Information" pluginFamily="Settings">
        <description>info</description>
      </ReportItem>
      <ReportItem port="445" protocol="tcp" severity="4" pluginID="11219" pluginName="SYN scanner" pluginFamily="Port scanners">
        <description>critical</description>
      </ReportItem>
    </ReportHost>
  </Report>
</NessusClientData_v2>"#;

/// A report container with no hosts.
pub const SCENARIO_B: &str = r#"<NessusClientData_v2><Report name="Empty"/></NessusClientData_v2>"#;

/// Truncated mid-tag.
pub const SCENARIO_C: &str = r#"<NessusClientData_v2><Report name="Broken"><ReportHost name="10.0.0.1"><ReportItem pluginID="1" "#;

pub fn collecting() -> (Arc<CollectingHandler>, EventDispatcher) {
    let collector = Arc::new(CollectingHandler::new());
    let dispatcher = EventDispatcher::with_handler(collector.clone());
    (collector, dispatcher)
}

pub fn config_without_validation() -> VulnReportConfig {
    let mut config = VulnReportConfig::default();
    config.validation.enabled = Some(false);
    config
}
