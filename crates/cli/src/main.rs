use clap::Parser;
use tracing::info;
use zonectl_domain::CliOverrides;

mod bootstrap;
mod commands;
mod di;

use commands::Command;

#[derive(Parser)]
#[command(name = "zonectl")]
#[command(version)]
#[command(about = "zonectl - Hosted-zone DNS record management for ACME and endpoint publishing")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Hosted zone snapshot file
    #[arg(long, value_name = "FILE")]
    zones_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        zones_file: cli.zones_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting zonectl v{}", env!("CARGO_PKG_VERSION"));

    commands::run(&config, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::RecordsCommand;

    #[test]
    fn test_parse_create_command() {
        let cli = Cli::try_parse_from([
            "zonectl",
            "--zones-file",
            "/tmp/zones.json",
            "records",
            "create",
            "--name",
            "_acme-challenge.example.com",
            "--type",
            "txt",
            "--content",
            "token",
        ])
        .unwrap();

        assert_eq!(cli.zones_file.as_deref(), Some("/tmp/zones.json"));
        assert!(matches!(
            cli.command,
            Command::Records(RecordsCommand::Create(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "zonectl", "records", "list", "--name", "example.com", "--type", "BOGUS",
        ]);
        assert!(result.is_err());
    }
}
