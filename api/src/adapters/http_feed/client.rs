//! Feed download client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::FeedClient;
use crate::error::FeedError;

/// Implementation of the feed client over plain HTTP GET
#[derive(Clone, Default)]
pub struct HttpFeedClient {
    http: Client,
}

impl HttpFeedClient {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<String, FeedError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
