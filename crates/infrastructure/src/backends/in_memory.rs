use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use zonectl_application::ports::{
    ChangeAction, ChangeStatus, HostedZoneBackend, Page, ResourceRecordSet,
};
use zonectl_domain::{DomainError, HostedZone};

use super::zone_store::{StoredZone, ZoneStore};

/// Hosted-zone backend kept entirely in process memory.
///
/// Changes are applied synchronously, so accepted changes report `INSYNC`
/// unless another status is configured with [`with_status`](Self::with_status).
pub struct InMemoryHostedZoneBackend {
    store: RwLock<ZoneStore>,
    page_size: usize,
    status: ChangeStatus,
}

impl InMemoryHostedZoneBackend {
    pub fn new(store: ZoneStore, page_size: usize) -> Self {
        Self {
            store: RwLock::new(store),
            page_size: page_size.max(1),
            status: ChangeStatus::InSync,
        }
    }

    pub fn with_zones(zones: Vec<StoredZone>) -> Self {
        Self::new(ZoneStore::new(zones), 100)
    }

    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn snapshot(&self) -> ZoneStore {
        self.store.read().await.clone()
    }

    /// Replaces the whole store, discarding any change applied since
    /// `store` was taken.
    pub async fn restore(&self, store: ZoneStore) {
        *self.store.write().await = store;
    }

    fn page<T: Clone>(&self, items: &[T], marker: Option<String>) -> Result<Page<T>, DomainError> {
        let start = match marker {
            Some(m) => m.parse::<usize>().map_err(|_| {
                DomainError::BackendCallFailure(format!("InvalidPaginationToken: {}", m))
            })?,
            None => 0,
        };

        let start = start.min(items.len());
        let end = (start + self.page_size).min(items.len());

        Ok(Page {
            items: items[start..end].to_vec(),
            next_marker: (end < items.len()).then(|| end.to_string()),
        })
    }
}

#[async_trait]
impl HostedZoneBackend for InMemoryHostedZoneBackend {
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone>, DomainError> {
        let store = self.store.read().await;
        let zones: Vec<HostedZone> = store.zones.iter().map(StoredZone::listing).collect();
        self.page(&zones, marker)
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        marker: Option<String>,
    ) -> Result<Page<ResourceRecordSet>, DomainError> {
        let store = self.store.read().await;
        let zone = store.zone(zone_id)?;
        self.page(&zone.record_sets, marker)
    }

    async fn change_record_set(
        &self,
        zone_id: &str,
        action: ChangeAction,
        record_set: ResourceRecordSet,
    ) -> Result<ChangeStatus, DomainError> {
        debug!(
            zone_id = %zone_id,
            action = %action,
            name = %record_set.name,
            record_type = %record_set.record_type,
            "Applying change"
        );

        self.store.write().await.apply(zone_id, action, record_set)?;
        Ok(self.status.clone())
    }
}
