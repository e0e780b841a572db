use crate::error::Error;

use async_trait::async_trait;

#[async_trait]
pub trait Loader {
    async fn load_raw_text(&self) -> Result<String, Error>;
}
