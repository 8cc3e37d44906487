use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the five symbols a card's color identity can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSymbol {
    W,
    U,
    B,
    R,
    G,
}

/// Image URLs keyed by size name (`art_crop`, `small`, `normal`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUris {
    pub art_crop: Option<String>,
    pub small: Option<String>,
    pub normal: Option<String>,
    #[serde(flatten)]
    pub other: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: Option<String>,
    pub image_uris: Option<ImageUris>,
}

/// A card as returned by the card-data API. Only the fields the bot reads are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub set: String,
    #[serde(default)]
    pub type_line: String,
    pub mana_cost: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub oracle_text: Option<String>,
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub color_identity: Vec<ColorSymbol>,
    pub image_uris: Option<ImageUris>,
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default)]
    pub scryfall_uri: String,
}

impl CardRecord {
    /// `Name|SET`, the form used in log lines.
    pub fn display_id(&self) -> String {
        format!("{}|{}", self.name, self.set.to_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// The reply payload handed to the chat host. Serializes to the embed JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDocument {
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    pub footer: EmbedFooter,
}
