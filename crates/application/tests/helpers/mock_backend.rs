#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use zonectl_application::ports::{
    ChangeAction, ChangeStatus, HostedZoneBackend, Page, ResourceRecordSet,
};
use zonectl_domain::{DomainError, HostedZone, RecordType};

#[derive(Debug, Clone)]
pub struct SubmittedChange {
    pub zone_id: String,
    pub action: ChangeAction,
    pub record_set: ResourceRecordSet,
}

/// Scriptable hosted-zone backend. Zones are stored in listing form
/// (`/hostedzone/<id>`, trailing dot). Accepted changes are applied to the
/// stored record sets so follow-up listings observe them.
#[derive(Clone)]
pub struct MockHostedZoneBackend {
    zones: Arc<RwLock<Vec<HostedZone>>>,
    record_sets: Arc<RwLock<HashMap<String, Vec<ResourceRecordSet>>>>,
    changes: Arc<RwLock<Vec<SubmittedChange>>>,
    status: Arc<RwLock<ChangeStatus>>,
    fail_changes: Arc<RwLock<bool>>,
    fail_listing: Arc<RwLock<bool>>,
    page_size: usize,
    zone_list_calls: Arc<RwLock<usize>>,
    record_list_calls: Arc<RwLock<usize>>,
}

impl MockHostedZoneBackend {
    pub fn new() -> Self {
        Self::with_page_size(100)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            zones: Arc::new(RwLock::new(Vec::new())),
            record_sets: Arc::new(RwLock::new(HashMap::new())),
            changes: Arc::new(RwLock::new(Vec::new())),
            status: Arc::new(RwLock::new(ChangeStatus::Pending)),
            fail_changes: Arc::new(RwLock::new(false)),
            fail_listing: Arc::new(RwLock::new(false)),
            page_size,
            zone_list_calls: Arc::new(RwLock::new(0)),
            record_list_calls: Arc::new(RwLock::new(0)),
        }
    }

    /// `name` without the trailing dot; stored in listing form.
    pub async fn add_zone(&self, id: &str, name: &str) {
        self.zones.write().await.push(HostedZone::new(
            format!("/hostedzone/{}", id),
            format!("{}.", name),
        ));
        self.record_sets
            .write()
            .await
            .entry(id.to_string())
            .or_default();
    }

    pub async fn add_record_set(&self, zone_id: &str, record_set: ResourceRecordSet) {
        self.record_sets
            .write()
            .await
            .entry(zone_id.to_string())
            .or_default()
            .push(record_set);
    }

    pub async fn set_status(&self, status: ChangeStatus) {
        *self.status.write().await = status;
    }

    pub async fn set_fail_changes(&self, fail: bool) {
        *self.fail_changes.write().await = fail;
    }

    pub async fn set_fail_listing(&self, fail: bool) {
        *self.fail_listing.write().await = fail;
    }

    pub async fn changes(&self) -> Vec<SubmittedChange> {
        self.changes.read().await.clone()
    }

    pub async fn record_sets(&self, zone_id: &str) -> Vec<ResourceRecordSet> {
        self.record_sets
            .read()
            .await
            .get(zone_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn find(
        &self,
        zone_id: &str,
        name: &str,
        record_type: RecordType,
    ) -> Option<ResourceRecordSet> {
        self.record_sets(zone_id)
            .await
            .into_iter()
            .find(|s| s.name == name && s.record_type == record_type)
    }

    pub async fn zone_list_calls(&self) -> usize {
        *self.zone_list_calls.read().await
    }

    pub async fn record_list_calls(&self) -> usize {
        *self.record_list_calls.read().await
    }

    fn paginate<T: Clone>(&self, items: &[T], marker: Option<String>) -> Page<T> {
        let start = marker.and_then(|m| m.parse::<usize>().ok()).unwrap_or(0);
        let end = (start + self.page_size).min(items.len());
        let next_marker = (end < items.len()).then(|| end.to_string());

        Page {
            items: items[start.min(end)..end].to_vec(),
            next_marker,
        }
    }
}

impl Default for MockHostedZoneBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostedZoneBackend for MockHostedZoneBackend {
    async fn list_hosted_zones(
        &self,
        marker: Option<String>,
    ) -> Result<Page<HostedZone>, DomainError> {
        *self.zone_list_calls.write().await += 1;
        if *self.fail_listing.read().await {
            return Err(DomainError::BackendCallFailure(
                "AccessDenied: mock listing failure".to_string(),
            ));
        }

        let zones = self.zones.read().await;
        Ok(self.paginate(&zones, marker))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        marker: Option<String>,
    ) -> Result<Page<ResourceRecordSet>, DomainError> {
        *self.record_list_calls.write().await += 1;
        if *self.fail_listing.read().await {
            return Err(DomainError::BackendCallFailure(
                "AccessDenied: mock listing failure".to_string(),
            ));
        }

        let sets = self.record_sets(zone_id).await;
        Ok(self.paginate(&sets, marker))
    }

    async fn change_record_set(
        &self,
        zone_id: &str,
        action: ChangeAction,
        record_set: ResourceRecordSet,
    ) -> Result<ChangeStatus, DomainError> {
        if *self.fail_changes.read().await {
            return Err(DomainError::BackendCallFailure(
                "Throttling: mock change failure".to_string(),
            ));
        }

        self.changes.write().await.push(SubmittedChange {
            zone_id: zone_id.to_string(),
            action,
            record_set: record_set.clone(),
        });

        let status = self.status.read().await.clone();
        if status.is_accepted() {
            let mut all = self.record_sets.write().await;
            let sets = all.entry(zone_id.to_string()).or_default();
            sets.retain(|s| !s.same_identity(&record_set));
            if action == ChangeAction::Upsert {
                sets.push(record_set);
            }
        }

        Ok(status)
    }
}
