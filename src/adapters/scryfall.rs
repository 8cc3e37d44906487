use crate::core::{CardRecord, CardSource, ConfigProvider};
use crate::utils::error::{MtgError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.scryfall.com";
pub const DEFAULT_USER_AGENT: &str = concat!("mtg-embed/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Error object Scryfall returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ScryfallErrorBody {
    #[serde(default)]
    code: String,
    details: String,
}

pub struct ScryfallClient {
    client: Client,
    endpoint: String,
}

impl ScryfallClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint().trim_end_matches('/').to_string(),
        })
    }

    async fn get_card<F>(&self, path: &str, params: &[(&str, &str)], on_not_found: F) -> Result<CardRecord>
    where
        F: FnOnce(String) -> MtgError + Send,
    {
        let url = format!("{}{}", self.endpoint, path);
        tracing::debug!("Making API request to: {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response.json::<CardRecord>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let details = match serde_json::from_str::<ScryfallErrorBody>(&body) {
            Ok(error) => {
                tracing::debug!("Scryfall error code: {}", error.code);
                error.details
            }
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };

        if status == StatusCode::NOT_FOUND {
            return Err(on_not_found(details));
        }

        Err(MtgError::Api {
            status: status.as_u16(),
            details,
        })
    }
}

#[async_trait]
impl CardSource for ScryfallClient {
    async fn fetch_named(&self, fuzzy_name: &str, set_code: Option<&str>) -> Result<CardRecord> {
        match set_code {
            Some(set) => {
                self.get_card(
                    "/cards/named",
                    &[("fuzzy", fuzzy_name), ("set", set)],
                    |_| MtgError::NotFoundInScope {
                        name: fuzzy_name.to_string(),
                        set: set.to_string(),
                    },
                )
                .await
            }
            None => {
                self.get_card("/cards/named", &[("fuzzy", fuzzy_name)], |details| {
                    MtgError::NotFound {
                        query: fuzzy_name.to_string(),
                        details,
                    }
                })
                .await
            }
        }
    }

    async fn fetch_random(&self) -> Result<CardRecord> {
        self.get_card("/cards/random", &[], |details| MtgError::NotFound {
            query: "random".to_string(),
            details,
        })
        .await
    }
}
