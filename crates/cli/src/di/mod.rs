use std::sync::Arc;
use tracing::{info, warn};
use zonectl_application::ports::DnsProvider;
use zonectl_application::services::{HostedZoneDnsProvider, WeightPolicy};
use zonectl_domain::{Config, ProviderKind};
use zonectl_infrastructure::backends::ZoneFileBackend;

/// Builds the provider selected by configuration or, failing that, by the
/// runtime environment.
pub async fn build_provider(config: &Config) -> anyhow::Result<Arc<dyn DnsProvider>> {
    let kind = config.provider.kind.ok_or_else(|| {
        anyhow::anyhow!(
            "No DNS provider detected; set provider.kind or {}",
            ProviderKind::Route53.detect_env()
        )
    })?;

    info!(provider = %kind, "Using DNS provider");

    match kind {
        ProviderKind::Route53 => {
            let backend = Arc::new(
                ZoneFileBackend::open(&config.backend.zones_file, config.backend.page_size).await?,
            );
            let weight_policy = WeightPolicy::new(config.provider.default_weight());
            let provider = HostedZoneDnsProvider::new(backend, weight_policy);

            if let Some(domain) = config.provider.domain.as_deref() {
                if let Err(e) = provider.prefetch_zone(domain).await {
                    warn!(domain = %domain, error = %e, "Could not pre-resolve hosted zone");
                }
            }

            Ok(Arc::new(provider))
        }
    }
}
