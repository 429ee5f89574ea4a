//! reqwest-backed station client

use crate::{ClientError, ClientResult, Feed};
use meteo_core::{LiveConditions, RawSample};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for a single station's dashboard API.
pub struct StationClient {
    client: Client,
    base: Url,
}

impl StationClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(base_url)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base.join(path)?)
    }

    /// GET a JSON body. Decoded from text so transport errors and payload
    /// errors stay distinguishable to the poll loop.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl Feed for StationClient {
    async fn fetch_live(&mut self) -> ClientResult<LiveConditions> {
        let url = self.endpoint("live")?;
        self.get_json(url).await
    }

    async fn fetch_history(&mut self, hours: u32) -> ClientResult<Vec<RawSample>> {
        let mut url = self.endpoint("history")?;
        url.query_pairs_mut()
            .append_pair("hours", &hours.to_string());
        self.get_json(url).await
    }
}
