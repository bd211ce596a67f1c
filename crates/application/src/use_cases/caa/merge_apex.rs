use std::sync::Arc;
use tracing::{error, info, instrument};
use zonectl_domain::{CaaRecord, DomainError, RecordType};

use crate::ports::{ChangeAction, HostedZoneBackend, ResourceRecordSet};
use crate::services::{record_sets, ZoneResolver};

/// Keeps one CAA set at the zone apex that authorizes every required
/// issuer while preserving whatever values were already there.
pub struct MergeApexCaaUseCase {
    resolver: Arc<ZoneResolver>,
    backend: Arc<dyn HostedZoneBackend>,
}

impl MergeApexCaaUseCase {
    pub fn new(resolver: Arc<ZoneResolver>, backend: Arc<dyn HostedZoneBackend>) -> Self {
        Self { resolver, backend }
    }

    /// Returns the merged value list written to the apex.
    #[instrument(skip(self, caa_record), fields(name = %caa_record.name))]
    pub async fn execute(&self, caa_record: &CaaRecord) -> Result<Vec<String>, DomainError> {
        self.merge(caa_record).await.map_err(|e| {
            error!(error = %e, "Error creating/merging apex CAA record");
            e
        })
    }

    async fn merge(&self, caa_record: &CaaRecord) -> Result<Vec<String>, DomainError> {
        let zone = self.resolver.resolve(&caa_record.name).await?;
        let apex = zone.apex_fqdn();

        let existing = record_sets::find_first(self.backend.as_ref(), &zone.id, |set| {
            set.name == apex && set.record_type == RecordType::CAA
        })
        .await?;

        let (existing_values, ttl) = match existing {
            Some(set) => {
                info!(
                    "Found existing CAA RRSet on apex {}, merging with required issuers",
                    zone.name
                );
                (set.values, set.ttl.unwrap_or(caa_record.ttl))
            }
            None => {
                info!("No existing CAA RRSet on apex {}, creating new one", zone.name);
                (Vec::new(), caa_record.ttl)
            }
        };

        let merged = merge_values(existing_values, caa_record.required_values());
        if merged.is_empty() {
            return Err(DomainError::EmptyMergeAborted(zone.name));
        }

        info!(
            "Setting merged CAA record set for apex {}: {}",
            zone.name,
            merged.join(", ")
        );

        let record_set = ResourceRecordSet::new(apex, RecordType::CAA, ttl, merged.clone());
        self.backend
            .change_record_set(&zone.id, ChangeAction::Upsert, record_set)
            .await?
            .into_result()?;

        Ok(merged)
    }
}

/// Existing values in their order, then each required value not already
/// present. Membership is exact string equality.
fn merge_values(existing: Vec<String>, required: Vec<String>) -> Vec<String> {
    let mut merged = existing;
    for value in required {
        if !merged.contains(&value) {
            merged.push(value);
        }
    }
    merged
}
