pub mod hosted_zone_provider;
pub mod record_codec;
pub mod record_sets;
pub mod weight_policy;
pub mod zone_resolver;

pub use hosted_zone_provider::HostedZoneDnsProvider;
pub use weight_policy::{WeightPolicy, WeightSource, WeightedRouting};
pub use zone_resolver::ZoneResolver;
