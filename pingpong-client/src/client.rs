//! Typed client for the `/ping` endpoint

use crate::config::Configuration;
use crate::error::{ClientError, Result};
use pingpong_core::{PingRequest, PingResponse};
use reqwest::{Client, Method, RequestBuilder};

const PING_PATH: &str = "/ping";

pub struct PingClient {
    client: Client,
    config: Configuration,
}

impl PingClient {
    pub fn new(config: Configuration) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...)
    pub fn with_client(client: Client, config: Configuration) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// `GET /ping`
    pub async fn get_ping(&self) -> Result<PingResponse> {
        self.send(self.request(Method::GET)).await
    }

    /// `POST /ping`
    pub async fn post_ping(&self, body: &PingRequest) -> Result<PingResponse> {
        self.send(self.request(Method::POST).json(body)).await
    }

    /// `PUT /ping`
    pub async fn put_ping(&self, body: &PingRequest) -> Result<PingResponse> {
        self.send(self.request(Method::PUT).json(body)).await
    }

    /// `DELETE /ping`
    pub async fn delete_ping(&self, body: &PingRequest) -> Result<PingResponse> {
        self.send(self.request(Method::DELETE).json(body)).await
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.config.url(PING_PATH))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<PingResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = status.as_u16(), %body, "Received response");

        if !status.is_success() {
            return Err(ClientError::Api { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
