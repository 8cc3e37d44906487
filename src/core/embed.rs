use crate::core::{CardRecord, DisplayDocument};
use crate::domain::model::{ColorSymbol, EmbedField, EmbedFooter, EmbedThumbnail};
use std::collections::HashSet;

const SEPARATOR: &str = " \u{2014} ";
const FOOTER_PREFIX: &str = "\u{1F58C} ";

/// Accent colors, 24-bit RGB.
pub mod palette {
    pub const WHITE: u32 = 0xFFFFFF;
    pub const BLUE: u32 = 0x3498DB;
    pub const DARK_PURPLE: u32 = 0x71368A;
    pub const RED: u32 = 0xE74C3C;
    pub const GREEN: u32 = 0x2ECC71;
    pub const LIGHT_GREY: u32 = 0x979C9F;
    pub const GOLD: u32 = 0xF1C40F;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Symbol(ColorSymbol),
    Colorless,
    Multicolor,
}

pub const PALETTE: [(PaletteKey, u32); 7] = [
    (PaletteKey::Symbol(ColorSymbol::W), palette::WHITE),
    (PaletteKey::Symbol(ColorSymbol::U), palette::BLUE),
    (PaletteKey::Symbol(ColorSymbol::B), palette::DARK_PURPLE),
    (PaletteKey::Symbol(ColorSymbol::R), palette::RED),
    (PaletteKey::Symbol(ColorSymbol::G), palette::GREEN),
    (PaletteKey::Colorless, palette::LIGHT_GREY),
    (PaletteKey::Multicolor, palette::GOLD),
];

pub fn palette_key(color_identity: &[ColorSymbol]) -> PaletteKey {
    let distinct: HashSet<ColorSymbol> = color_identity.iter().copied().collect();
    match distinct.len() {
        0 => PaletteKey::Colorless,
        1 => distinct
            .into_iter()
            .next()
            .map(PaletteKey::Symbol)
            .unwrap_or(PaletteKey::Colorless),
        _ => PaletteKey::Multicolor,
    }
}

pub fn accent_color(color_identity: &[ColorSymbol]) -> u32 {
    let key = palette_key(color_identity);
    PALETTE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, color)| *color)
        .unwrap_or(palette::LIGHT_GREY)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `<mana cost> — <type line> — [<power>/<toughness>] — ⟪<loyalty>⟫`, each optional part omitted when absent.
pub fn describe(card: &CardRecord) -> String {
    let mut description = card.type_line.clone();

    if let Some(mana_cost) = present(&card.mana_cost) {
        description = format!("{}{}{}", mana_cost, SEPARATOR, description);
    }

    if let (Some(power), Some(toughness)) = (present(&card.power), present(&card.toughness)) {
        description.push_str(&format!("{}[{}/{}]", SEPARATOR, power, toughness));
    }

    if let Some(loyalty) = present(&card.loyalty) {
        description.push_str(&format!("{}\u{27EA}{}\u{27EB}", SEPARATOR, loyalty));
    }

    description
}

pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Art crop of the card, falling back to the first face that has one.
pub fn thumbnail_url(card: &CardRecord) -> Option<String> {
    card.image_uris
        .as_ref()
        .and_then(|uris| uris.art_crop.clone())
        .or_else(|| {
            card.card_faces.as_ref().and_then(|faces| {
                faces
                    .iter()
                    .filter_map(|face| face.image_uris.as_ref())
                    .find_map(|uris| uris.art_crop.clone())
            })
        })
}

fn text_fields(card: &CardRecord) -> Vec<EmbedField> {
    let mut fields = Vec::new();

    if let Some(oracle_text) = present(&card.oracle_text) {
        fields.push(EmbedField {
            name: "Oracle Text".to_string(),
            value: oracle_text.to_string(),
            inline: false,
        });
    }

    if let Some(flavor_text) = present(&card.flavor_text) {
        fields.push(EmbedField {
            name: "Flavor Text".to_string(),
            value: format!("*{}*", flavor_text),
            inline: false,
        });
    }

    fields
}

pub fn build_display_document(card: &CardRecord) -> DisplayDocument {
    DisplayDocument {
        title: card.name.clone(),
        description: describe(card),
        url: strip_query(&card.scryfall_uri).to_string(),
        color: accent_color(&card.color_identity),
        fields: text_fields(card),
        thumbnail: thumbnail_url(card).map(|url| EmbedThumbnail { url }),
        footer: EmbedFooter {
            text: format!("{}{}", FOOTER_PREFIX, card.artist),
        },
    }
}
