use std::sync::Arc;
use tracing::{error, info, instrument};
use zonectl_domain::{DomainError, RecordId};

use crate::ports::{ChangeAction, HostedZoneBackend};
use crate::services::{record_sets, ZoneResolver};

pub struct DeleteDnsRecordUseCase {
    resolver: Arc<ZoneResolver>,
    backend: Arc<dyn HostedZoneBackend>,
}

impl DeleteDnsRecordUseCase {
    pub fn new(resolver: Arc<ZoneResolver>, backend: Arc<dyn HostedZoneBackend>) -> Self {
        Self { resolver, backend }
    }

    /// Deletes the record set addressed by `record_id` in the zone owning
    /// `domain`. The backend needs the exact current content to delete a
    /// set, so the zone is listed first; a miss submits nothing.
    #[instrument(skip(self))]
    pub async fn execute(&self, record_id: &str, domain: &str) -> Result<(), DomainError> {
        self.delete(record_id, domain).await.map_err(|e| {
            error!(error = %e, "Error deleting DNS record");
            e
        })
    }

    async fn delete(&self, record_id: &str, domain: &str) -> Result<(), DomainError> {
        let id: RecordId = record_id.parse()?;
        let zone = self.resolver.resolve(domain).await?;

        let target = record_sets::find_first(self.backend.as_ref(), &zone.id, |set| {
            set.name == id.name
                && set.record_type == id.record_type
                && id
                    .set_identifier
                    .as_ref()
                    .is_none_or(|wanted| set.set_identifier.as_ref() == Some(wanted))
        })
        .await?
        .ok_or_else(|| DomainError::RecordNotFound(record_id.to_string()))?;

        info!("Deleting record: {}", record_id);
        self.backend
            .change_record_set(&zone.id, ChangeAction::Delete, target)
            .await?
            .into_result()
    }
}
