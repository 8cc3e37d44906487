// Adapters layer: concrete implementations of domain ports for external systems.

pub mod scryfall;

pub use scryfall::ScryfallClient;
