//! Translation between [`DnsRecord`] and the backend's record-set encoding.
//!
//! Wire rules: names are fully qualified with a trailing dot, TXT values are
//! double-quoted, CAA values are `flags tag "value"`, and alias sets carry
//! their target instead of values.

use zonectl_domain::{
    strip_trailing_dot, to_fqdn, CaaValue, DnsRecord, RecordData, RecordId, RecordType,
    DEFAULT_RECORD_TTL,
};

use crate::ports::ResourceRecordSet;
use crate::services::WeightedRouting;

pub fn record_id(set: &ResourceRecordSet) -> RecordId {
    RecordId::new(&set.name, set.record_type, set.set_identifier.clone())
}

/// Decodes a backend record set into the caller-facing model.
///
/// Only the first value is decoded, CAA sets included; merging multi-value
/// CAA sets works on the raw values instead.
pub fn decode_record_set(set: &ResourceRecordSet) -> DnsRecord {
    let mut data = RecordData {
        weight: set.weight,
        set_identifier: set.set_identifier.clone(),
        caa: None,
    };

    let first_value = set.values.first().map(String::as_str);

    let content = match (set.record_type, first_value) {
        (RecordType::CAA, Some(raw)) => {
            data.caa = decode_caa_value(raw);
            raw.to_string()
        }
        (RecordType::TXT, Some(raw)) => unquote(raw).to_string(),
        (_, Some(raw)) => raw.to_string(),
        (_, None) => set
            .alias_target
            .as_ref()
            .map(|alias| strip_trailing_dot(&alias.dns_name).to_string())
            .unwrap_or_default(),
    };

    DnsRecord {
        id: Some(record_id(set).to_string()),
        name: strip_trailing_dot(&set.name).to_string(),
        record_type: set.record_type,
        content,
        ttl: set.ttl.unwrap_or(DEFAULT_RECORD_TTL),
        proxied: false,
        priority: None,
        data,
    }
}

/// Splits `0 issue "letsencrypt.org"` into its three parts. Values with
/// fewer than three tokens or non-numeric flags are not decomposed.
pub fn decode_caa_value(raw: &str) -> Option<CaaValue> {
    let mut parts = raw.splitn(3, ' ');
    let flags = parts.next()?.parse::<u8>().ok()?;
    let tag = parts.next()?;
    let value = parts.next()?;

    Some(CaaValue {
        flags,
        tag: tag.to_string(),
        value: unquote(value).to_string(),
    })
}

pub fn encode_value(record_type: RecordType, content: &str) -> String {
    match record_type {
        RecordType::TXT => format!("\"{}\"", content),
        _ => content.to_string(),
    }
}

/// Builds the UPSERT payload for a single-value record, attaching weighted
/// routing when `routing` is given.
pub fn encode_record(record: &DnsRecord, routing: Option<&WeightedRouting>) -> ResourceRecordSet {
    let mut set = ResourceRecordSet::new(
        to_fqdn(&record.name),
        record.record_type,
        record.ttl,
        vec![encode_value(record.record_type, &record.content)],
    );

    if let Some(routing) = routing {
        set.weight = Some(routing.weight);
        set.set_identifier = Some(routing.set_identifier.clone());
    }

    set
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}
