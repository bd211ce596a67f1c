use async_trait::async_trait;
use std::sync::Arc;
use zonectl_domain::{CaaRecord, DnsRecord, DomainError, HostedZone, RecordType};

use crate::ports::{DnsProvider, HostedZoneBackend};
use crate::services::{WeightPolicy, ZoneResolver};
use crate::use_cases::{
    CreateDnsRecordUseCase, DeleteDnsRecordUseCase, ListDnsRecordsUseCase, MergeApexCaaUseCase,
};

/// [`DnsProvider`] for hosted-zone backends without persistent record ids.
///
/// All operations share one [`ZoneResolver`], so a zone is listed at most
/// once per provider session.
pub struct HostedZoneDnsProvider {
    resolver: Arc<ZoneResolver>,
    list: ListDnsRecordsUseCase,
    create: CreateDnsRecordUseCase,
    delete: DeleteDnsRecordUseCase,
    merge_caa: MergeApexCaaUseCase,
}

impl HostedZoneDnsProvider {
    pub fn new(backend: Arc<dyn HostedZoneBackend>, weight_policy: WeightPolicy) -> Self {
        let resolver = Arc::new(ZoneResolver::new(backend.clone()));

        Self {
            list: ListDnsRecordsUseCase::new(resolver.clone(), backend.clone()),
            create: CreateDnsRecordUseCase::new(resolver.clone(), backend.clone(), weight_policy),
            delete: DeleteDnsRecordUseCase::new(resolver.clone(), backend.clone()),
            merge_caa: MergeApexCaaUseCase::new(resolver.clone(), backend),
            resolver,
        }
    }

    /// Resolves and caches the zone of `domain` ahead of the first write.
    pub async fn prefetch_zone(&self, domain: &str) -> Result<HostedZone, DomainError> {
        self.resolver.resolve(domain).await
    }

    pub fn resolver(&self) -> &Arc<ZoneResolver> {
        &self.resolver
    }
}

#[async_trait]
impl DnsProvider for HostedZoneDnsProvider {
    async fn get_dns_records(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.list.execute(name, record_type).await
    }

    async fn create_dns_record(&self, record: &DnsRecord) -> Result<(), DomainError> {
        self.create.execute(record).await
    }

    async fn delete_dns_record(&self, record_id: &str, domain: &str) -> Result<(), DomainError> {
        self.delete.execute(record_id, domain).await
    }

    async fn create_caa_record(&self, caa_record: &CaaRecord) -> Result<Vec<String>, DomainError> {
        self.merge_caa.execute(caa_record).await
    }
}
