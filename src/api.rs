//! HTTP Backend
//!
//! `Backend` over the browser fetch API (reqwest's wasm32 client).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use dashboard_core::{
    endpoints, AlertRecord, ApiError, ApiResult, Backend, InventoryItem, ItemQuery,
    SensorStatusSnapshot,
};

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    origin: String,
}

impl HttpBackend {
    /// An empty `api_base` targets the page's own origin.
    pub fn new(api_base: &str) -> Self {
        Self {
            client: Client::new(),
            origin: resolve_origin(api_base),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn resolve_origin(api_base: &str) -> String {
    if !api_base.is_empty() {
        return api_base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn active_alerts(&self) -> ApiResult<Vec<AlertRecord>> {
        let url = self.url(endpoints::ALERTS);
        let request = self.client.get(&url).query(&[("status", "active")]);
        self.send_json(request, &url).await
    }

    async fn resolve_alert(&self, id: u32) -> ApiResult<AlertRecord> {
        let url = self.url(&endpoints::resolve_alert(id));
        let request = self.client.post(&url);
        self.send_json(request, &url).await
    }

    async fn items(&self, query: &ItemQuery) -> ApiResult<Vec<InventoryItem>> {
        let url = self.url(endpoints::ITEMS);
        let request = self.client.get(&url).query(&query.params());
        self.send_json(request, &url).await
    }

    async fn sensor_statuses(&self) -> ApiResult<Vec<SensorStatusSnapshot>> {
        let url = self.url(endpoints::SENSOR_STATUS);
        let request = self.client.get(&url);
        self.send_json(request, &url).await
    }
}
