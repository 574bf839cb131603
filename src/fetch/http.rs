use std::{marker::PhantomData, time::Duration};

use axum::async_trait;
use serde::de::DeserializeOwned;

use crate::{config::{Config, PanelConfig}, poll::{Fetch, FetchError}};

/// GETs a json status endpoint, deserialising the body as T
///  - unsuccessful http statuses are failures, as are bodies that are not a T
pub struct HttpFetcher<T>
{
    client: reqwest::Client,
    endpoint: String,
    snapshot: PhantomData<fn() -> T>
}

impl<T> HttpFetcher<T>
{
    pub fn new(endpoint: &str, timeout: Duration) -> Result<HttpFetcher<T>, FetchError>
    {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(HttpFetcher { client, endpoint: endpoint.to_string(), snapshot: PhantomData })
    }

    /// A fetcher for panel, with its timeout resolved against config
    pub fn from_panel(panel: &PanelConfig, config: &Config) -> Result<HttpFetcher<T>, FetchError>
    {
        HttpFetcher::new(&panel.endpoint, config.timeout(panel))
    }

    pub fn get_endpoint(&self) -> String
    {
        self.endpoint.clone()
    }
}

#[async_trait]
impl<T> Fetch for HttpFetcher<T>
where T: DeserializeOwned + Send + 'static
{
    type Snapshot = T;

    async fn fetch(&self) -> Result<T, FetchError>
    {
        crate::debug(format!("GET {}", self.endpoint), Some("HTTP"));

        let response = self.client.get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let snapshot = response.json::<T>().await?;
        Ok(snapshot)
    }
}
