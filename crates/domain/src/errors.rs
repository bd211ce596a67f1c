use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No hosted zone found for domain: {0}")]
    ZoneNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid record_id format: {0}")]
    InvalidRecordId(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Backend call failed: {0}")]
    BackendCallFailure(String),

    /// The backend accepted the change but reported a status other than
    /// PENDING or INSYNC. The change may still have been applied.
    #[error("Unexpected change status: {0}")]
    UnexpectedChangeStatus(String),

    #[error("No CAA values to set on apex {0} after merge; aborting")]
    EmptyMergeAborted(String),

    #[error("Invalid zone snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
