use crate::error::Error;
use crate::loader::Loader;

use async_trait::async_trait;
use tracing::info;

pub struct FileLoader {
    path: String,
}

impl FileLoader {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

#[async_trait]
impl Loader for FileLoader {
    async fn load_raw_text(&self) -> Result<String, Error> {
        info!("Loading itinerary from {}", self.path);
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
