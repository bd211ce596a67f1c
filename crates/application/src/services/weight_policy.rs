use std::fmt;
use zonectl_domain::{DnsRecord, RecordType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightSource {
    Explicit,
    Default,
}

impl fmt::Display for WeightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightSource::Explicit => write!(f, "Explicit"),
            WeightSource::Default => write!(f, "Default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedRouting {
    pub weight: u64,
    pub set_identifier: String,
    pub source: WeightSource,
}

/// Decides whether a new record is written as a weighted variant.
///
/// An explicit `data.weight` always wins. Otherwise the configured default
/// weight applies to every type except TXT, which carries validation tokens
/// that must not be split across weighted variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightPolicy {
    default_weight: Option<u64>,
}

impl WeightPolicy {
    pub fn new(default_weight: Option<u64>) -> Self {
        Self { default_weight }
    }

    /// `now_secs` feeds the synthesized set identifier when the record has
    /// none.
    pub fn resolve(&self, record: &DnsRecord, now_secs: i64) -> Option<WeightedRouting> {
        let (weight, source) = match record.data.weight {
            Some(weight) => (weight, WeightSource::Explicit),
            None if record.record_type == RecordType::TXT => return None,
            None => (self.default_weight?, WeightSource::Default),
        };

        let set_identifier = match record.data.set_identifier.as_deref() {
            Some(explicit) => explicit.to_string(),
            None => synthesize_set_identifier(now_secs),
        };

        if set_identifier.is_empty() {
            return None;
        }

        Some(WeightedRouting {
            weight,
            set_identifier,
            source,
        })
    }
}

/// `auto-{unix seconds}-{random hex}`. The random suffix keeps two writes in
/// the same second from sharing an identifier.
pub fn synthesize_set_identifier(now_secs: i64) -> String {
    format!("auto-{}-{:04x}", now_secs, fastrand::u16(..))
}
