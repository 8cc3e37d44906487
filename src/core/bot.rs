use crate::core::embed::build_display_document;
use crate::core::lookup::CardLookup;
use crate::core::{CardSource, DisplayDocument};
use crate::utils::error::Result;

pub const GROUP_NAME: &str = "mtg";
pub const GROUP_DESCRIPTION: &str = "Magic: The Gathering";

/// A command in the `mtg` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtgCommand {
    Card { query: String },
    Random,
}

impl MtgCommand {
    pub fn name(&self) -> &'static str {
        match self {
            MtgCommand::Card { .. } => "card",
            MtgCommand::Random => "random",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MtgCommand::Card { .. } => {
                "Search for a card. e.g. /mtg ancestral recall or /mtg smokestack|v14"
            }
            MtgCommand::Random => "Show a random card.",
        }
    }
}

/// Runs `mtg` commands and produces the embed to reply with.
pub struct CardBot<S: CardSource> {
    lookup: CardLookup<S>,
    group_name: String,
}

impl<S: CardSource> CardBot<S> {
    pub fn new(source: S) -> Self {
        Self {
            lookup: CardLookup::new(source),
            group_name: GROUP_NAME.to_string(),
        }
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn lookup(&self) -> &CardLookup<S> {
        &self.lookup
    }

    pub async fn handle(&self, command: &MtgCommand) -> Result<DisplayDocument> {
        tracing::debug!("Handling /{} {}", self.group_name, command.name());

        let card = match command {
            MtgCommand::Card { query } => self.lookup.resolve_card(query).await?,
            MtgCommand::Random => self.lookup.resolve_random_card().await?,
        };

        Ok(build_display_document(&card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup::tests::{card, Call, MockCardSource};
    use crate::utils::error::MtgError;

    #[tokio::test]
    async fn test_card_command_builds_embed() {
        let mut bolt = card("Lightning Bolt", "lea");
        bolt.mana_cost = Some("{R}".to_string());
        bolt.scryfall_uri = "https://scryfall.com/card/lea/161/lightning-bolt?utm_source=api".to_string();
        let bot = CardBot::new(MockCardSource::new().with_card("bolt", Some("lea"), bolt));

        let doc = bot
            .handle(&MtgCommand::Card {
                query: "bolt|lea".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(doc.title, "Lightning Bolt");
        assert_eq!(doc.description, "{R} — Instant");
        assert_eq!(doc.url, "https://scryfall.com/card/lea/161/lightning-bolt");
    }

    #[tokio::test]
    async fn test_random_command() {
        let bot = CardBot::new(MockCardSource::new().with_random(card("Black Lotus", "lea")));

        let doc = bot.handle(&MtgCommand::Random).await.unwrap();

        assert_eq!(doc.title, "Black Lotus");
        assert_eq!(bot.lookup().source().calls().await, vec![Call::Random]);
    }

    #[tokio::test]
    async fn test_unknown_card_surfaces_not_found() {
        let bot = CardBot::new(MockCardSource::new());

        let err = bot
            .handle(&MtgCommand::Card {
                query: "asdkjaskjd".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MtgError::NotFound { .. }));
        assert!(err.user_friendly_message().contains("asdkjaskjd"));
    }

    #[test]
    fn test_group_name_override() {
        let bot = CardBot::new(MockCardSource::new());
        assert_eq!(bot.group_name(), "mtg");
        assert_eq!(bot.with_group_name("cards").group_name(), "cards");
    }

    #[test]
    fn test_command_metadata() {
        let card = MtgCommand::Card {
            query: String::new(),
        };
        assert_eq!(card.name(), "card");
        assert!(card.description().contains("smokestack|v14"));
        assert_eq!(MtgCommand::Random.name(), "random");
        assert_eq!(MtgCommand::Random.description(), "Show a random card.");
    }
}
