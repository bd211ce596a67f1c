use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use zonectl_application::ports::{
    ChangeAction, ChangeStatus, HostedZoneBackend, Page, ResourceRecordSet,
};
use zonectl_domain::{DomainError, HostedZone};

use super::in_memory::InMemoryHostedZoneBackend;
use super::zone_store::ZoneStore;

/// [`InMemoryHostedZoneBackend`] persisted to a JSON snapshot.
///
/// The snapshot is loaded once on open and rewritten after every accepted
/// change. Rejected changes leave the file untouched, and a change whose
/// save fails is rolled back in memory too.
pub struct ZoneFileBackend {
    path: PathBuf,
    inner: InMemoryHostedZoneBackend,
    write_lock: Mutex<()>,
}

impl ZoneFileBackend {
    pub async fn open(path: impl AsRef<Path>, page_size: usize) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let store: ZoneStore = serde_json::from_str(&contents).map_err(|e| {
            DomainError::InvalidSnapshot(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        info!(
            path = %path.display(),
            zones = store.zones.len(),
            "Loaded hosted zone snapshot"
        );

        Ok(Self {
            path,
            inner: InMemoryHostedZoneBackend::new(store, page_size),
            write_lock: Mutex::new(()),
        })
    }

    async fn persist(&self) -> Result<(), DomainError> {
        let snapshot = self.inner.snapshot().await;
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| DomainError::IoError(format!("Failed to serialize zones: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "Hosted zone snapshot saved");
        Ok(())
    }
}

#[async_trait]
impl HostedZoneBackend for ZoneFileBackend {
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone>, DomainError> {
        self.inner.list_hosted_zones(marker).await
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        marker: Option<String>,
    ) -> Result<Page<ResourceRecordSet>, DomainError> {
        self.inner.list_record_sets(zone_id, marker).await
    }

    async fn change_record_set(
        &self,
        zone_id: &str,
        action: ChangeAction,
        record_set: ResourceRecordSet,
    ) -> Result<ChangeStatus, DomainError> {
        let _guard = self.write_lock.lock().await;

        let previous = self.inner.snapshot().await;
        let status = self
            .inner
            .change_record_set(zone_id, action, record_set)
            .await?;

        if let Err(e) = self.persist().await {
            self.inner.restore(previous).await;
            warn!(path = %self.path.display(), error = %e, "Rolled back unsaved change");
            return Err(DomainError::BackendCallFailure(format!(
                "Change not saved: {}",
                e
            )));
        }
        Ok(status)
    }
}
