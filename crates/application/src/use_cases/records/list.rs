use std::sync::Arc;
use tracing::{error, info, instrument};
use zonectl_domain::{to_fqdn, DnsRecord, DomainError, RecordType};

use crate::ports::HostedZoneBackend;
use crate::services::{record_codec, record_sets, ZoneResolver};

pub struct ListDnsRecordsUseCase {
    resolver: Arc<ZoneResolver>,
    backend: Arc<dyn HostedZoneBackend>,
}

impl ListDnsRecordsUseCase {
    pub fn new(resolver: Arc<ZoneResolver>, backend: Arc<dyn HostedZoneBackend>) -> Self {
        Self { resolver, backend }
    }

    /// Records stored exactly at `name`, weighted variants included,
    /// optionally narrowed to one type.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.list(name, record_type).await.map_err(|e| {
            error!(name = %name, error = %e, "Error getting DNS records");
            e
        })
    }

    async fn list(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let zone = self.resolver.resolve(name).await?;
        let fqdn = to_fqdn(name);

        info!("Checking for existing DNS records for {}", name);

        let records = record_sets::list_all(self.backend.as_ref(), &zone.id)
            .await?
            .iter()
            .filter(|set| set.name == fqdn)
            .filter(|set| record_type.is_none_or(|t| set.record_type == t))
            .map(record_codec::decode_record_set)
            .collect();

        Ok(records)
    }
}
