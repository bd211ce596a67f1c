pub mod create;
pub mod delete;
pub mod list;

pub use create::CreateDnsRecordUseCase;
pub use delete::DeleteDnsRecordUseCase;
pub use list::ListDnsRecordsUseCase;
