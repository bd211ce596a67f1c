mod dns_provider;
mod hosted_zone_backend;

pub use dns_provider::DnsProvider;
pub use hosted_zone_backend::{
    AliasTarget, ChangeAction, ChangeStatus, HostedZoneBackend, Page, ResourceRecordSet,
};

// Re-export for convenience
pub use zonectl_domain::HostedZone;
