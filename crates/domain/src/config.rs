pub mod backend;
pub mod errors;
pub mod logging;
pub mod provider;
pub mod root;

pub use backend::BackendConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use provider::{ProviderConfig, ProviderKind};
pub use root::{CliOverrides, Config};
