use crate::core::{CardRecord, CardSource};
use crate::utils::error::{MtgError, Result};

/// Raw `name` or `name|set` input split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    pub name: String,
    pub set: Option<String>,
}

impl CardQuery {
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split('|').collect();
        let name = parts[0].trim().to_string();
        let set = if parts.len() > 1 {
            parts
                .last()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        if name.is_empty() {
            return Err(MtgError::ValidationError {
                message: "Card name cannot be empty".to_string(),
            });
        }

        Ok(Self { name, set })
    }
}

/// Resolves user input to a single card, falling back from a set-scoped search
/// to a name-only search once.
pub struct CardLookup<S: CardSource> {
    source: S,
}

impl<S: CardSource> CardLookup<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn resolve_card(&self, query: &str) -> Result<CardRecord> {
        let query = CardQuery::parse(query)?;

        if let Some(set) = query.set.as_deref() {
            tracing::info!("MTG: searching for \"{}\" in set \"{}\"", query.name, set);
            match self.source.fetch_named(&query.name, Some(set)).await {
                Ok(card) => {
                    tracing::info!("Found {}", card.display_id());
                    return Ok(card);
                }
                Err(MtgError::NotFoundInScope { .. }) => {
                    tracing::info!("Unable to find in set \"{}\", searching again without set", set);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!("MTG: searching for \"{}\"", query.name);
        let card = self.source.fetch_named(&query.name, None).await?;
        tracing::info!("Found {}", card.display_id());
        Ok(card)
    }

    pub async fn resolve_random_card(&self) -> Result<CardRecord> {
        tracing::info!("MTG: showing a random card");
        let card = self.source.fetch_random().await?;
        tracing::info!("Found {}", card.display_id());
        Ok(card)
    }
}
