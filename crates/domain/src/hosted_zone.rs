use serde::{Deserialize, Serialize};

use crate::dns_name::{is_same_or_subdomain, strip_trailing_dot};

/// A backend-managed authoritative container for every record under one
/// domain suffix. `name` never carries the trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedZone {
    pub id: String,
    pub name: String,
}

impl HostedZone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Builds a zone from the backend's listing form, where ids may be
    /// path-like (`/hostedzone/Z123`) and names end with a dot.
    pub fn from_listing(raw_id: &str, raw_name: &str) -> Self {
        let id = raw_id.rsplit('/').next().unwrap_or(raw_id);
        Self::new(id, strip_trailing_dot(raw_name))
    }

    pub fn contains(&self, domain: &str) -> bool {
        is_same_or_subdomain(domain, &self.name)
    }

    pub fn apex_fqdn(&self) -> String {
        crate::dns_name::to_fqdn(&self.name)
    }
}
