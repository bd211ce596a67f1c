use serde::{Deserialize, Serialize};

/// Decomposed CAA value: `flags tag "value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaValue {
    pub flags: u8,
    pub tag: String,
    pub value: String,
}

/// Backend-specific attributes attached to a record.
///
/// `weight` and `set_identifier` describe weighted routing; `caa` is only
/// filled when a CAA record is decoded from the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caa: Option<CaaValue>,
}

impl RecordData {
    pub fn weighted(weight: u64, set_identifier: impl Into<String>) -> Self {
        Self {
            weight: Some(weight),
            set_identifier: Some(set_identifier.into()),
            caa: None,
        }
    }
}
