pub mod in_memory;
pub mod zone_file;
pub mod zone_store;

pub use in_memory::InMemoryHostedZoneBackend;
pub use zone_file::ZoneFileBackend;
pub use zone_store::{StoredZone, ZoneStore};
