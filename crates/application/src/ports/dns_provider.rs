use async_trait::async_trait;
use zonectl_domain::{CaaRecord, DnsRecord, DomainError, RecordType};

/// Record-management capabilities every DNS provider offers. One
/// implementation exists per backend; the binary picks it from the
/// runtime environment.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    async fn get_dns_records(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError>;

    async fn create_dns_record(&self, record: &DnsRecord) -> Result<(), DomainError>;

    /// `record_id` is the synthetic id of a listed record; `domain` selects
    /// the hosted zone.
    async fn delete_dns_record(&self, record_id: &str, domain: &str) -> Result<(), DomainError>;

    /// Returns the merged apex CAA values that were written.
    async fn create_caa_record(&self, caa_record: &CaaRecord) -> Result<Vec<String>, DomainError>;
}
