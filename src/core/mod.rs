pub mod bot;
pub mod embed;
pub mod lookup;

pub use crate::domain::model::{CardRecord, DisplayDocument};
pub use crate::domain::ports::{CardSource, ConfigProvider};
pub use crate::utils::error::Result;
