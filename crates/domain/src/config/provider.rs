use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Environment variable carrying the default routing weight.
pub const INITIAL_WEIGHT_ENV: &str = "ROUTE53_INITIAL_WEIGHT";

/// Environment variable naming the domain to pre-resolve at startup.
pub const DOMAIN_ENV: &str = "DOMAIN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Hosted-zone backend with weighted routing and apex CAA merging.
    Route53,
}

impl ProviderKind {
    /// Detects the provider from the runtime environment. `lookup` is
    /// `std::env::var` in production.
    pub fn detect<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        [ProviderKind::Route53]
            .into_iter()
            .find(|kind| lookup(kind.detect_env()).is_some_and(|v| !v.is_empty()))
    }

    pub fn detect_env(&self) -> &'static str {
        match self {
            ProviderKind::Route53 => "AWS_ACCESS_KEY_ID",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Route53 => "route53",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Explicit provider; detected from the environment when absent.
    #[serde(default)]
    pub kind: Option<ProviderKind>,

    /// Raw default weight applied to non-TXT records created without one.
    #[serde(default)]
    pub initial_weight: Option<String>,

    /// Domain whose hosted zone is resolved once at startup.
    #[serde(default)]
    pub domain: Option<String>,
}

impl ProviderConfig {
    /// The configured default weight, if it is a non-empty run of ASCII
    /// digits that fits in a `u64`. Anything else is ignored.
    pub fn default_weight(&self) -> Option<u64> {
        let raw = self.initial_weight.as_deref()?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            warn!(value = %raw, "Ignoring non-numeric default weight");
            return None;
        }

        match raw.parse::<u64>() {
            Ok(weight) => Some(weight),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring out-of-range default weight");
                None
            }
        }
    }
}
