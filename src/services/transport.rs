// src/services/transport.rs
// DOCUMENTATION: HTTP transport seam
// PURPOSE: Perform a single GET exchange; everything else stays in the gateway

use crate::errors::GatewayError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

/// Raw response of a GET exchange
/// DOCUMENTATION: Header names are lower-cased; the body is left unparsed
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Performs HTTP GET requests on behalf of the gateway
/// DOCUMENTATION: Only transport failures are errors here; non-success
/// statuses come back as a normal `TransportResponse`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<TransportResponse, GatewayError>;
}

/// Default transport backed by reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Reuse an existing client (connection pool, proxy settings, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<TransportResponse, GatewayError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Unsplash API request failed: {}", e);
                GatewayError::RequestFailed(e.to_string())
            })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let body = response.text().await.map_err(|e| {
            log::error!("Failed to read Unsplash response body: {}", e);
            GatewayError::RequestFailed(e.to_string())
        })?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::sync::Mutex;

    /// A request seen by `StubTransport`
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: String,
        pub params: Vec<(&'static str, String)>,
    }

    impl RecordedRequest {
        pub fn param(&self, key: &str) -> Option<&str> {
            self.params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Replays canned responses keyed by URL suffix and records every request
    #[derive(Default)]
    pub struct StubTransport {
        routes: Mutex<Vec<(String, Result<TransportResponse, GatewayError>)>>,
        pub requests: Mutex<Vec<RecordedRequest>>,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, url_suffix: &str, status: u16, body: &str) -> Self {
            self.respond_with_headers(url_suffix, status, body, &[])
        }

        pub fn respond_with_headers(
            self,
            url_suffix: &str,
            status: u16,
            body: &str,
            headers: &[(&str, &str)],
        ) -> Self {
            let response = TransportResponse {
                status,
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                    .collect(),
                body: body.to_string(),
            };
            self.routes
                .lock()
                .unwrap()
                .push((url_suffix.to_string(), Ok(response)));
            self
        }

        pub fn fail(self, url_suffix: &str) -> Self {
            self.routes.lock().unwrap().push((
                url_suffix.to_string(),
                Err(GatewayError::RequestFailed("connection refused".to_string())),
            ));
            self
        }

        pub fn recorded(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn get(
            &self,
            url: &str,
            params: &[(&'static str, String)],
        ) -> Result<TransportResponse, GatewayError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_string(),
                params: params.to_vec(),
            });

            self.routes
                .lock()
                .unwrap()
                .iter()
                .find(|(suffix, _)| url.ends_with(suffix.as_str()))
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| {
                    Err(GatewayError::RequestFailed(format!("no route for {}", url)))
                })
        }
    }
}
