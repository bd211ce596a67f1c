use std::sync::Arc;
use zonectl_application::services::ZoneResolver;
use zonectl_domain::DomainError;

mod helpers;
use helpers::MockHostedZoneBackend;

async fn backend_with_nested_zones() -> Arc<MockHostedZoneBackend> {
    let backend = Arc::new(MockHostedZoneBackend::new());
    backend.add_zone("ZCOM", "com").await;
    backend.add_zone("ZEXAMPLE", "example.com").await;
    backend.add_zone("ZSUB", "sub.example.com").await;
    backend
}

#[tokio::test]
async fn test_resolve_picks_longest_suffix() {
    let backend = backend_with_nested_zones().await;
    let resolver = ZoneResolver::new(backend);

    let zone = resolver.resolve("a.sub.example.com").await.unwrap();

    assert_eq!(zone.name, "sub.example.com");
    assert_eq!(zone.id, "ZSUB");
}

#[tokio::test]
async fn test_resolve_exact_match() {
    let backend = backend_with_nested_zones().await;
    let resolver = ZoneResolver::new(backend);

    let zone = resolver.resolve("example.com").await.unwrap();

    assert_eq!(zone.name, "example.com");
    assert_eq!(zone.id, "ZEXAMPLE");
}

#[tokio::test]
async fn test_resolve_accepts_trailing_dot() {
    let backend = backend_with_nested_zones().await;
    let resolver = ZoneResolver::new(backend);

    let zone = resolver.resolve("www.example.com.").await.unwrap();
    assert_eq!(zone.id, "ZEXAMPLE");
}

#[tokio::test]
async fn test_resolve_does_not_match_partial_label() {
    let backend = Arc::new(MockHostedZoneBackend::new());
    backend.add_zone("ZEXAMPLE", "example.com").await;
    let resolver = ZoneResolver::new(backend);

    let result = resolver.resolve("badexample.com").await;

    assert_eq!(
        result,
        Err(DomainError::ZoneNotFound("badexample.com".to_string()))
    );
}

#[tokio::test]
async fn test_resolve_follows_pagination() {
    let backend = Arc::new(MockHostedZoneBackend::with_page_size(1));
    backend.add_zone("Z1", "other.org").await;
    backend.add_zone("Z2", "another.net").await;
    backend.add_zone("Z3", "example.com").await;
    let resolver = ZoneResolver::new(backend.clone());

    let zone = resolver.resolve("api.example.com").await.unwrap();

    assert_eq!(zone.id, "Z3");
    assert_eq!(backend.zone_list_calls().await, 3);
}

#[tokio::test]
async fn test_resolve_reuses_cache_for_subdomains() {
    let backend = backend_with_nested_zones().await;
    let resolver = ZoneResolver::new(backend.clone());

    resolver.resolve("example.com").await.unwrap();
    let calls_after_first = backend.zone_list_calls().await;

    let zone = resolver.resolve("deep.www.example.com").await.unwrap();

    assert_eq!(zone.id, "ZEXAMPLE");
    assert_eq!(backend.zone_list_calls().await, calls_after_first);
    assert_eq!(resolver.cached_zone_count().await, 1);
}

#[tokio::test]
async fn test_resolve_unrelated_domain_lists_again() {
    let backend = Arc::new(MockHostedZoneBackend::new());
    backend.add_zone("ZA", "example.com").await;
    backend.add_zone("ZB", "example.org").await;
    let resolver = ZoneResolver::new(backend.clone());

    resolver.resolve("example.com").await.unwrap();
    let zone = resolver.resolve("www.example.org").await.unwrap();

    assert_eq!(zone.id, "ZB");
    assert_eq!(backend.zone_list_calls().await, 2);
    assert_eq!(resolver.cached_zone_count().await, 2);
}

#[tokio::test]
async fn test_resolve_not_found_is_not_cached() {
    let backend = Arc::new(MockHostedZoneBackend::new());
    let resolver = ZoneResolver::new(backend.clone());

    assert!(matches!(
        resolver.resolve("example.com").await,
        Err(DomainError::ZoneNotFound(_))
    ));
    assert_eq!(resolver.cached_zone_count().await, 0);
}

#[tokio::test]
async fn test_resolve_propagates_backend_failure() {
    let backend = Arc::new(MockHostedZoneBackend::new());
    backend.set_fail_listing(true).await;
    let resolver = ZoneResolver::new(backend);

    let result = resolver.resolve("example.com").await;

    assert!(matches!(result, Err(DomainError::BackendCallFailure(_))));
}
