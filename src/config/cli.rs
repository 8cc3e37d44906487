use crate::adapters::scryfall::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::core::bot::MtgCommand;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_settings, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mtg-embed")]
#[command(about = "Magic: The Gathering card lookups rendered as chat embeds")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CliCommand {
    /// Search for a card. e.g. `card "ancestral recall"` or `card "smokestack|v14"`
    Card { query: String },
    /// Show a random card.
    Random,
}

impl From<&CliCommand> for MtgCommand {
    fn from(command: &CliCommand) -> Self {
        match command {
            CliCommand::Card { query } => MtgCommand::Card {
                query: query.clone(),
            },
            CliCommand::Random => MtgCommand::Random,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_api_settings(&self.api_endpoint, &self.user_agent, self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_command() {
        let config = CliConfig::try_parse_from(["mtg-embed", "card", "smokestack|v14"]).unwrap();

        assert_eq!(config.api_endpoint, "https://api.scryfall.com");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.user_agent.starts_with("mtg-embed/"));
        assert_eq!(
            MtgCommand::from(&config.command),
            MtgCommand::Card {
                query: "smokestack|v14".to_string()
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_random_with_flags() {
        let config = CliConfig::try_parse_from([
            "mtg-embed",
            "--api-endpoint",
            "http://localhost:9000",
            "--verbose",
            "random",
        ])
        .unwrap();

        assert_eq!(config.api_endpoint(), "http://localhost:9000");
        assert!(config.verbose);
        assert_eq!(MtgCommand::from(&config.command), MtgCommand::Random);
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config =
            CliConfig::try_parse_from(["mtg-embed", "--api-endpoint", "not a url", "random"]).unwrap();
        assert!(config.validate().is_err());
    }
}
