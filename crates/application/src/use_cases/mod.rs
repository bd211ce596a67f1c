pub mod caa;
pub mod records;

// Re-export use cases
pub use caa::MergeApexCaaUseCase;
pub use records::{CreateDnsRecordUseCase, DeleteDnsRecordUseCase, ListDnsRecordsUseCase};
