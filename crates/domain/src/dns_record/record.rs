use serde::{Deserialize, Serialize};

use super::{RecordData, RecordId, RecordType};

/// TTL reported for record sets that carry none (alias records).
pub const DEFAULT_RECORD_TTL: u32 = 60;

/// One DNS entry as seen by callers: names without the trailing dot, TXT
/// content unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub content: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub proxied: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    #[serde(default)]
    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: String, record_type: RecordType, content: String, ttl: u32) -> Self {
        Self {
            id: None,
            name,
            record_type,
            content,
            ttl,
            proxied: false,
            priority: None,
            data: RecordData::default(),
        }
    }

    pub fn with_data(mut self, data: RecordData) -> Self {
        self.data = data;
        self
    }

    /// Parsed form of `id`, when the record came from the backend.
    pub fn record_id(&self) -> Option<RecordId> {
        self.id.as_deref().and_then(|id| id.parse().ok())
    }
}

fn default_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}
