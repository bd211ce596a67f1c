use clap::{Args, Subcommand};
use zonectl_domain::{CaaRecord, Config, DnsRecord, DomainError, RecordData, RecordType};

use crate::di;

#[derive(Subcommand)]
pub enum Command {
    /// Manage individual records
    #[command(subcommand)]
    Records(RecordsCommand),

    /// Merge the required CAA issuers into the apex of the zone owning a domain
    Caa(CaaArgs),

    /// Print the provider selected for this environment
    Detect,
}

#[derive(Subcommand)]
pub enum RecordsCommand {
    /// List records stored at a name
    List {
        #[arg(long)]
        name: String,

        #[arg(long = "type", value_parser = parse_record_type)]
        record_type: Option<RecordType>,
    },

    /// Create or replace a record
    Create(CreateArgs),

    /// Delete a record by the id printed by `records list`
    Delete {
        #[arg(long)]
        id: String,

        /// Domain used to find the hosted zone
        #[arg(long)]
        domain: String,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    name: String,

    #[arg(long = "type", value_parser = parse_record_type)]
    record_type: RecordType,

    #[arg(long)]
    content: String,

    #[arg(long, default_value_t = 60)]
    ttl: u32,

    /// Routing weight; overrides ROUTE53_INITIAL_WEIGHT
    #[arg(long)]
    weight: Option<u64>,

    #[arg(long)]
    set_identifier: Option<String>,
}

#[derive(Args)]
pub struct CaaArgs {
    #[arg(long)]
    domain: String,

    #[arg(long, default_value_t = 0)]
    flags: u8,

    #[arg(long, default_value = "issue")]
    tag: String,

    #[arg(long, default_value_t = 60)]
    ttl: u32,
}

fn parse_record_type(raw: &str) -> Result<RecordType, String> {
    raw.parse().map_err(|e: DomainError| e.to_string())
}

/// Runs `command`. The provider is only built for commands that talk to a
/// backend.
pub async fn run(config: &Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Detect => {
            match config.provider.kind {
                Some(kind) => println!("{}", kind),
                None => println!("none"),
            }
        }
        Command::Records(RecordsCommand::List { name, record_type }) => {
            let provider = di::build_provider(config).await?;
            for record in provider.get_dns_records(&name, record_type).await? {
                println!("{}", serde_json::to_string(&record)?);
            }
        }
        Command::Records(RecordsCommand::Create(args)) => {
            let record = DnsRecord::new(args.name, args.record_type, args.content, args.ttl)
                .with_data(RecordData {
                    weight: args.weight,
                    set_identifier: args.set_identifier,
                    caa: None,
                });
            let provider = di::build_provider(config).await?;
            provider.create_dns_record(&record).await?;
        }
        Command::Records(RecordsCommand::Delete { id, domain }) => {
            let provider = di::build_provider(config).await?;
            provider.delete_dns_record(&id, &domain).await?;
        }
        Command::Caa(args) => {
            let request = CaaRecord::new(args.domain, args.flags, args.tag, args.ttl);
            let provider = di::build_provider(config).await?;
            for value in provider.create_caa_record(&request).await? {
                println!("{}", value);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detect_needs_no_provider() {
        let config = Config::default();
        assert!(run(&config, Command::Detect).await.is_ok());
    }

    #[tokio::test]
    async fn test_backend_command_without_provider_fails() {
        let config = Config::default();
        let command = Command::Records(RecordsCommand::List {
            name: "example.com".to_string(),
            record_type: None,
        });

        let err = run(&config, command).await.unwrap_err();
        assert!(err.to_string().contains("No DNS provider detected"));
    }

    #[tokio::test]
    async fn test_missing_zones_file_fails() {
        let mut config = Config::default();
        config.provider.kind = Some(zonectl_domain::ProviderKind::Route53);
        config.backend.zones_file = "/nonexistent/zonectl/zones.json".to_string();
        let command = Command::Caa(CaaArgs {
            domain: "example.com".to_string(),
            flags: 0,
            tag: "issue".to_string(),
            ttl: 60,
        });

        assert!(run(&config, command).await.is_err());
    }
}
