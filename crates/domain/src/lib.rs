//! Zonectl Domain Layer
pub mod caa_record;
pub mod config;
pub mod dns_name;
pub mod dns_record;
pub mod errors;
pub mod hosted_zone;

pub use caa_record::{CaaRecord, REQUIRED_CAA_ISSUERS};
pub use config::{
    BackendConfig, CliOverrides, Config, ConfigError, LoggingConfig, ProviderConfig, ProviderKind,
};
pub use dns_name::{is_same_or_subdomain, strip_trailing_dot, to_fqdn};
pub use dns_record::{CaaValue, DnsRecord, RecordData, RecordId, RecordType, DEFAULT_RECORD_TTL};
pub use errors::DomainError;
pub use hosted_zone::HostedZone;
