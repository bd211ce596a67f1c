use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use zonectl_domain::{DomainError, HostedZone, RecordType};

/// One page of a paginated listing. `next_marker` is `None` on the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    pub hosted_zone_id: String,
    pub dns_name: String,
    #[serde(default)]
    pub evaluate_target_health: bool,
}

/// A record set in the backend's wire form: fully-qualified name, raw
/// (quoted) values, optional alias target and weighted-routing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
}

impl ResourceRecordSet {
    pub fn new(name: String, record_type: RecordType, ttl: u32, values: Vec<String>) -> Self {
        Self {
            name,
            record_type,
            ttl: Some(ttl),
            values,
            alias_target: None,
            weight: None,
            set_identifier: None,
        }
    }

    /// True when this set is addressed by the same (name, type, set id)
    /// tuple as `other`.
    pub fn same_identity(&self, other: &ResourceRecordSet) -> bool {
        self.name == other.name
            && self.record_type == other.record_type
            && self.set_identifier == other.set_identifier
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    /// Create the set, or replace it entirely if it exists.
    Upsert,
    /// Remove the set; the submitted set must match the stored one exactly.
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Upsert => "UPSERT",
            ChangeAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Asynchronous status reported for a submitted change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    Pending,
    InSync,
    Other(String),
}

impl ChangeStatus {
    /// Queued or applied. `Pending` does not mean the record already resolves.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ChangeStatus::Pending | ChangeStatus::InSync)
    }

    /// Maps any status other than PENDING/INSYNC to
    /// [`DomainError::UnexpectedChangeStatus`].
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_accepted() {
            Ok(())
        } else {
            Err(DomainError::UnexpectedChangeStatus(self.to_string()))
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeStatus::Pending => write!(f, "PENDING"),
            ChangeStatus::InSync => write!(f, "INSYNC"),
            ChangeStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Hosted-zone DNS API. Implementations convert every transport, auth or
/// service failure into [`DomainError::BackendCallFailure`].
#[async_trait]
pub trait HostedZoneBackend: Send + Sync {
    /// Zone names are returned in wire form (trailing dot); ids may be
    /// path-like.
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone>, DomainError>;

    async fn list_record_sets(
        &self,
        zone_id: &str,
        marker: Option<String>,
    ) -> Result<Page<ResourceRecordSet>, DomainError>;

    async fn change_record_set(
        &self,
        zone_id: &str,
        action: ChangeAction,
        record_set: ResourceRecordSet,
    ) -> Result<ChangeStatus, DomainError>;
}
