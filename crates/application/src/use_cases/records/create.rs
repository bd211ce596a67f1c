use std::sync::Arc;
use tracing::{error, info, instrument};
use zonectl_domain::{DnsRecord, DomainError};

use crate::ports::{ChangeAction, HostedZoneBackend};
use crate::services::{record_codec, WeightPolicy, ZoneResolver};

pub struct CreateDnsRecordUseCase {
    resolver: Arc<ZoneResolver>,
    backend: Arc<dyn HostedZoneBackend>,
    weight_policy: WeightPolicy,
}

impl CreateDnsRecordUseCase {
    pub fn new(
        resolver: Arc<ZoneResolver>,
        backend: Arc<dyn HostedZoneBackend>,
        weight_policy: WeightPolicy,
    ) -> Self {
        Self {
            resolver,
            backend,
            weight_policy,
        }
    }

    /// Upserts `record`. Succeeds only when the backend reports the change
    /// as PENDING or INSYNC. An `UnexpectedChangeStatus` failure may still
    /// have been applied by the backend; it is not rolled back.
    #[instrument(skip(self, record), fields(name = %record.name, record_type = %record.record_type))]
    pub async fn execute(&self, record: &DnsRecord) -> Result<(), DomainError> {
        self.create(record).await.map_err(|e| {
            error!(error = %e, "Error creating DNS record");
            e
        })
    }

    async fn create(&self, record: &DnsRecord) -> Result<(), DomainError> {
        let zone = self.resolver.resolve(&record.name).await?;

        let routing = self
            .weight_policy
            .resolve(record, chrono::Utc::now().timestamp());

        if let Some(routing) = &routing {
            info!(
                weight = routing.weight,
                set_identifier = %routing.set_identifier,
                source = %routing.source,
                "Weighted routing active"
            );
        }

        let record_set = record_codec::encode_record(record, routing.as_ref());

        info!("Adding {} record for {}", record.record_type, record.name);
        self.backend
            .change_record_set(&zone.id, ChangeAction::Upsert, record_set)
            .await?
            .into_result()
    }
}
