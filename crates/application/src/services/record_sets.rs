//! Paginated scans over a zone's record sets.

use zonectl_domain::DomainError;

use crate::ports::{HostedZoneBackend, ResourceRecordSet};

/// Collects every record set of the zone, following all pages.
pub async fn list_all(
    backend: &dyn HostedZoneBackend,
    zone_id: &str,
) -> Result<Vec<ResourceRecordSet>, DomainError> {
    let mut sets = Vec::new();
    let mut marker = None;

    loop {
        let page = backend.list_record_sets(zone_id, marker).await?;
        sets.extend(page.items);

        match page.next_marker {
            Some(next) => marker = Some(next),
            None => return Ok(sets),
        }
    }
}

/// Returns the first record set matching `predicate`, stopping the scan as
/// soon as it is found.
pub async fn find_first<P>(
    backend: &dyn HostedZoneBackend,
    zone_id: &str,
    predicate: P,
) -> Result<Option<ResourceRecordSet>, DomainError>
where
    P: Fn(&ResourceRecordSet) -> bool + Send,
{
    let mut marker = None;

    loop {
        let page = backend.list_record_sets(zone_id, marker).await?;

        if let Some(found) = page.items.into_iter().find(|set| predicate(set)) {
            return Ok(Some(found));
        }

        match page.next_marker {
            Some(next) => marker = Some(next),
            None => return Ok(None),
        }
    }
}
