use std::fmt;
use std::str::FromStr;

use super::RecordType;
use crate::dns_name::to_fqdn;
use crate::errors::DomainError;

/// Synthetic identity of a record set.
///
/// The backend has no persistent record ids, so a record is addressed by
/// `name:type`, or `name:type:set_identifier` for weighted variants. `name`
/// is always the fully-qualified form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    pub name: String,
    pub record_type: RecordType,
    pub set_identifier: Option<String>,
}

impl RecordId {
    pub fn new(name: &str, record_type: RecordType, set_identifier: Option<String>) -> Self {
        Self {
            name: to_fqdn(name),
            record_type,
            set_identifier,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.set_identifier {
            Some(set_id) => write!(f, "{}:{}:{}", self.name, self.record_type, set_id),
            None => write!(f, "{}:{}", self.name, self.record_type),
        }
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (name, record_type, set_identifier) = match parts.as_slice() {
            [name, record_type] => (*name, *record_type, None),
            [name, record_type, set_id] => (*name, *record_type, Some(set_id.to_string())),
            _ => return Err(DomainError::InvalidRecordId(s.to_string())),
        };

        if name.is_empty() {
            return Err(DomainError::InvalidRecordId(s.to_string()));
        }

        let record_type = record_type
            .parse::<RecordType>()
            .map_err(|_| DomainError::InvalidRecordId(s.to_string()))?;

        Ok(Self::new(name, record_type, set_identifier))
    }
}
