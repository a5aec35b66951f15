mod compliance_config;

pub use compliance_config::ComplianceConfig;
