use serde::{Deserialize, Serialize};

/// Certificate authorities that must always be authorized at a zone apex.
pub const REQUIRED_CAA_ISSUERS: [&str; 5] = [
    "letsencrypt.org",
    "amazon.com",
    "amazontrust.com",
    "awstrust.com",
    "amazonaws.com",
];

/// Request to make sure the apex CAA set of the zone owning `name`
/// authorizes every issuer in [`REQUIRED_CAA_ISSUERS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaRecord {
    pub name: String,
    pub flags: u8,
    pub tag: String,
    pub ttl: u32,
}

impl CaaRecord {
    pub fn new(name: impl Into<String>, flags: u8, tag: impl Into<String>, ttl: u32) -> Self {
        Self {
            name: name.into(),
            flags,
            tag: tag.into(),
            ttl,
        }
    }

    /// Wire values (`0 issue "letsencrypt.org"`) for every required issuer,
    /// in allow-list order.
    pub fn required_values(&self) -> Vec<String> {
        REQUIRED_CAA_ISSUERS
            .iter()
            .map(|issuer| format!("{} {} \"{}\"", self.flags, self.tag, issuer))
            .collect()
    }
}
