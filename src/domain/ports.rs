use crate::domain::model::CardRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// The card-data API.
///
/// `fetch_named` with a set must report a miss as `MtgError::NotFoundInScope`;
/// without a set, as `MtgError::NotFound`.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_named(&self, fuzzy_name: &str, set_code: Option<&str>) -> Result<CardRecord>;
    async fn fetch_random(&self) -> Result<CardRecord>;
}
