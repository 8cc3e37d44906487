pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig};
pub use config::TomlConfig;

pub use adapters::ScryfallClient;
pub use core::{
    bot::{CardBot, MtgCommand},
    embed::build_display_document,
    lookup::{CardLookup, CardQuery},
};
pub use domain::model::{CardRecord, ColorSymbol, DisplayDocument, EmbedField};
pub use utils::error::{MtgError, Result};
