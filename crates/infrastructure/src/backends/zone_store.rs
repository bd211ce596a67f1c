use serde::{Deserialize, Serialize};
use zonectl_application::ports::{ChangeAction, ResourceRecordSet};
use zonectl_domain::{strip_trailing_dot, DomainError, HostedZone};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredZone {
    pub id: String,
    /// Zone name without the trailing dot.
    pub name: String,
    #[serde(default)]
    pub record_sets: Vec<ResourceRecordSet>,
}

impl StoredZone {
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: strip_trailing_dot(name).to_string(),
            record_sets: Vec::new(),
        }
    }

    /// The zone as the backend lists it: path-like id, trailing dot.
    pub fn listing(&self) -> HostedZone {
        HostedZone::new(
            format!("/hostedzone/{}", self.id),
            format!("{}.", self.name),
        )
    }
}

/// Hosted zones and their record sets, with the change rules of a
/// hosted-zone DNS API:
///
/// * UPSERT replaces the set with the same (name, type, set identifier) or
///   inserts it.
/// * DELETE needs the exact stored set, values and TTL included.
/// * A weighted set cannot share name and type with a plain one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStore {
    #[serde(default)]
    pub zones: Vec<StoredZone>,
}

impl ZoneStore {
    pub fn new(zones: Vec<StoredZone>) -> Self {
        Self { zones }
    }

    pub fn zone(&self, zone_id: &str) -> Result<&StoredZone, DomainError> {
        let id = bare_zone_id(zone_id);
        self.zones
            .iter()
            .find(|z| z.id == id)
            .ok_or_else(|| no_such_zone(zone_id))
    }

    fn zone_mut(&mut self, zone_id: &str) -> Result<&mut StoredZone, DomainError> {
        let id = bare_zone_id(zone_id);
        self.zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| no_such_zone(zone_id))
    }

    pub fn apply(
        &mut self,
        zone_id: &str,
        action: ChangeAction,
        record_set: ResourceRecordSet,
    ) -> Result<(), DomainError> {
        validate_record_set(&record_set)?;
        let zone = self.zone_mut(zone_id)?;

        if !zonectl_domain::is_same_or_subdomain(&record_set.name, &zone.name) {
            return Err(DomainError::BackendCallFailure(format!(
                "InvalidChangeBatch: RRSet with DNS name {} is not permitted in zone {}",
                record_set.name, zone.name
            )));
        }

        match action {
            ChangeAction::Upsert => upsert(zone, record_set),
            ChangeAction::Delete => delete(zone, &record_set),
        }
    }
}

fn upsert(zone: &mut StoredZone, record_set: ResourceRecordSet) -> Result<(), DomainError> {
    let weighted = record_set.set_identifier.is_some();
    let conflicts = zone.record_sets.iter().any(|s| {
        s.name == record_set.name
            && s.record_type == record_set.record_type
            && s.set_identifier.is_some() != weighted
    });
    if conflicts {
        return Err(DomainError::BackendCallFailure(format!(
            "InvalidChangeBatch: RRSet {} {} mixes weighted and non-weighted records",
            record_set.name, record_set.record_type
        )));
    }

    match zone
        .record_sets
        .iter_mut()
        .find(|s| s.same_identity(&record_set))
    {
        Some(existing) => *existing = record_set,
        None => zone.record_sets.push(record_set),
    }
    Ok(())
}

fn delete(zone: &mut StoredZone, record_set: &ResourceRecordSet) -> Result<(), DomainError> {
    let position = zone
        .record_sets
        .iter()
        .position(|s| s == record_set)
        .ok_or_else(|| {
            DomainError::BackendCallFailure(format!(
                "InvalidChangeBatch: Tried to delete resource record set [name='{}', type='{}'] but it was not found",
                record_set.name, record_set.record_type
            ))
        })?;

    zone.record_sets.remove(position);
    Ok(())
}

fn validate_record_set(record_set: &ResourceRecordSet) -> Result<(), DomainError> {
    if !record_set.name.ends_with('.') {
        return Err(DomainError::BackendCallFailure(format!(
            "InvalidInput: record name {} is not fully qualified",
            record_set.name
        )));
    }

    if record_set.weight.is_some() != record_set.set_identifier.is_some() {
        return Err(DomainError::BackendCallFailure(
            "InvalidInput: Weight and SetIdentifier must be specified together".to_string(),
        ));
    }

    match (&record_set.alias_target, record_set.values.is_empty()) {
        (None, true) => Err(DomainError::BackendCallFailure(
            "InvalidInput: ResourceRecords must not be empty".to_string(),
        )),
        (Some(_), false) => Err(DomainError::BackendCallFailure(
            "InvalidInput: AliasTarget cannot be combined with ResourceRecords".to_string(),
        )),
        _ => Ok(()),
    }
}

fn bare_zone_id(zone_id: &str) -> &str {
    zone_id.rsplit('/').next().unwrap_or(zone_id)
}

fn no_such_zone(zone_id: &str) -> DomainError {
    DomainError::BackendCallFailure(format!(
        "NoSuchHostedZone: No hosted zone found with ID: {}",
        zone_id
    ))
}
