use serde::{Deserialize, Serialize};

/// Where the hosted-zone store lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// JSON snapshot holding zones and record sets.
    #[serde(default = "default_zones_file")]
    pub zones_file: String,

    /// Items returned per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            zones_file: default_zones_file(),
            page_size: default_page_size(),
        }
    }
}

fn default_zones_file() -> String {
    "zones.json".to_string()
}

fn default_page_size() -> usize {
    100
}
