mod record;
mod record_data;
mod record_id;
mod record_type;

pub use record::{DnsRecord, DEFAULT_RECORD_TTL};
pub use record_data::{CaaValue, RecordData};
pub use record_id::RecordId;
pub use record_type::RecordType;
