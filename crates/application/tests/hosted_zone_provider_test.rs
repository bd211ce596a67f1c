use std::sync::Arc;
use zonectl_application::ports::{ChangeAction, DnsProvider};
use zonectl_application::services::{HostedZoneDnsProvider, WeightPolicy};
use zonectl_domain::{CaaRecord, DnsRecord, RecordType};

mod helpers;
use helpers::MockHostedZoneBackend;

async fn provider() -> (Arc<MockHostedZoneBackend>, HostedZoneDnsProvider) {
    let backend = Arc::new(MockHostedZoneBackend::new());
    backend.add_zone("ZEXAMPLE", "example.com").await;
    let provider = HostedZoneDnsProvider::new(backend.clone(), WeightPolicy::new(Some(100)));
    (backend, provider)
}

#[tokio::test]
async fn test_acme_challenge_lifecycle() {
    let (backend, provider) = provider().await;
    let challenge = DnsRecord::new(
        "_acme-challenge.example.com".to_string(),
        RecordType::TXT,
        "validation-token".to_string(),
        60,
    );

    provider.create_dns_record(&challenge).await.unwrap();

    let listed = provider
        .get_dns_records("_acme-challenge.example.com", Some(RecordType::TXT))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "validation-token");
    assert!(listed[0].data.weight.is_none());

    let id = listed[0].id.clone().unwrap();
    provider.delete_dns_record(&id, "example.com").await.unwrap();

    let after = provider
        .get_dns_records("_acme-challenge.example.com", None)
        .await
        .unwrap();
    assert!(after.is_empty());

    let actions: Vec<ChangeAction> = backend.changes().await.iter().map(|c| c.action).collect();
    assert_eq!(actions, vec![ChangeAction::Upsert, ChangeAction::Delete]);
}

#[tokio::test]
async fn test_weighted_endpoint_is_deletable_by_listed_id() {
    let (backend, provider) = provider().await;
    let endpoint = DnsRecord::new(
        "app.example.com".to_string(),
        RecordType::A,
        "192.0.2.44".to_string(),
        60,
    );

    provider.create_dns_record(&endpoint).await.unwrap();

    let listed = provider.get_dns_records("app.example.com", None).await.unwrap();
    assert_eq!(listed[0].data.weight, Some(100));
    let id = listed[0].id.clone().unwrap();
    assert!(id.starts_with("app.example.com.:A:auto-"));

    provider.delete_dns_record(&id, "app.example.com").await.unwrap();
    assert!(backend.record_sets("ZEXAMPLE").await.is_empty());
}

#[tokio::test]
async fn test_operations_share_one_zone_lookup() {
    let (backend, provider) = provider().await;

    provider.prefetch_zone("example.com").await.unwrap();
    provider
        .create_caa_record(&CaaRecord::new("example.com", 0, "issue", 60))
        .await
        .unwrap();
    provider
        .get_dns_records("www.example.com", None)
        .await
        .unwrap();

    assert_eq!(backend.zone_list_calls().await, 1);
    assert_eq!(provider.resolver().cached_zone_count().await, 1);
}
