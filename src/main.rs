use anyhow::Context;
use clap::Parser;
use mtg_embed::core::bot::GROUP_NAME;
use mtg_embed::core::ConfigProvider;
use mtg_embed::utils::{logger, validation::Validate};
use mtg_embed::{CardBot, CliConfig, MtgCommand, ScryfallClient, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let file_config = match config.config.as_deref() {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path))?,
        ),
        None => None,
    };

    let json_logs = config.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs());
    let log_level = file_config.as_ref().and_then(|c| c.log_level());
    logger::init_cli_logger(config.verbose, log_level, json_logs);

    tracing::info!("Starting mtg-embed");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let command = MtgCommand::from(&config.command);
    let exit_code = match &file_config {
        Some(file_config) => run(file_config, &file_config.bot.name, &command).await?,
        None => run(&config, GROUP_NAME, &command).await?,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(
    config: &C,
    group_name: &str,
    command: &MtgCommand,
) -> anyhow::Result<i32> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        return Ok(e.exit_code());
    }

    let client = ScryfallClient::new(config)?;
    let bot = CardBot::new(client).with_group_name(group_name);

    match bot.handle(command).await {
        Ok(document) => {
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(0)
        }
        Err(e) => {
            if e.is_not_found() {
                tracing::warn!("🔍 {}", e);
            } else {
                tracing::error!("❌ /{} {} failed: {}", group_name, command.name(), e);
            }
            eprintln!("❌ {}", e.user_friendly_message());
            Ok(e.exit_code())
        }
    }
}
