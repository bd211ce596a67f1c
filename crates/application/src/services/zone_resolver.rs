use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use zonectl_domain::{strip_trailing_dot, DomainError, HostedZone};

use crate::ports::HostedZoneBackend;

/// Maps domains to the hosted zone that owns them.
///
/// Winning zones are cached by name for the lifetime of the resolver and
/// reused for the zone itself and every name below it. The cache is never
/// invalidated: one resolver assumes the zone topology is fixed for a run.
pub struct ZoneResolver {
    backend: Arc<dyn HostedZoneBackend>,
    zones: RwLock<HashMap<String, String>>,
}

impl ZoneResolver {
    pub fn new(backend: Arc<dyn HostedZoneBackend>) -> Self {
        Self {
            backend,
            zones: RwLock::new(HashMap::new()),
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, domain: &str) -> Result<HostedZone, DomainError> {
        let domain = strip_trailing_dot(domain);

        if let Some(zone) = self.cached(domain).await {
            debug!(zone = %zone.name, "Reusing cached hosted zone");
            return Ok(zone);
        }

        let zone = self.lookup(domain).await?;
        info!(zone = %zone.name, zone_id = %zone.id, "Resolved hosted zone");

        self.zones
            .write()
            .await
            .insert(zone.name.clone(), zone.id.clone());
        Ok(zone)
    }

    pub async fn cached_zone_count(&self) -> usize {
        self.zones.read().await.len()
    }

    async fn cached(&self, domain: &str) -> Option<HostedZone> {
        let zones = self.zones.read().await;
        zones
            .iter()
            .map(|(name, id)| HostedZone::new(id.clone(), name.clone()))
            .filter(|zone| zone.contains(domain))
            .max_by_key(|zone| zone.name.len())
    }

    /// Walks every page of the zone listing. An exact name match wins at
    /// once; otherwise the longest zone name that is a dot-suffix of
    /// `domain` wins.
    async fn lookup(&self, domain: &str) -> Result<HostedZone, DomainError> {
        let mut best: Option<HostedZone> = None;
        let mut marker = None;

        loop {
            let page = self.backend.list_hosted_zones(marker).await?;

            for raw in page.items {
                let zone = HostedZone::from_listing(&raw.id, &raw.name);

                if zone.name.eq_ignore_ascii_case(domain) {
                    return Ok(zone);
                }

                if !zone.contains(domain) {
                    continue;
                }

                let more_specific = match &best {
                    Some(current) => zone.name.len() > current.name.len(),
                    None => true,
                };
                if more_specific {
                    best = Some(zone);
                }
            }

            match page.next_marker {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        best.ok_or_else(|| DomainError::ZoneNotFound(domain.to_string()))
    }
}
