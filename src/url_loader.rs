use crate::error::Error;
use crate::loader::Loader;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

pub struct UrlLoader {
    url: String,
    source: String,
}

impl UrlLoader {
    pub fn new(url: &str, source: &str) -> Self {
        Self {
            url: url.to_string(),
            source: source.to_string(),
        }
    }
}

#[async_trait]
impl Loader for UrlLoader {
    async fn load_raw_text(&self) -> Result<String, Error> {
        info!("Fetching itinerary from {}", self.source);
        let client = Client::new();
        let response = client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
