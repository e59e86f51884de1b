//! HTTP client for store API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the store API, handling URL assembly, status checks, and response
//! decoding into typed records.

use super::error::PlatziError;
use log::*;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Makes requests to the store API and decodes response data into the
/// requested record type.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a GET request and decode the response body.
    ///
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, PlatziError> {
        self.call(Method::GET, path, None).await
    }

    /// Make a request with an optional JSON body and decode the response.
    ///
    /// Status is checked before decoding so a non-success response surfaces
    /// as a status failure rather than a schema violation, and a malformed
    /// 2xx body surfaces as a decode failure with the body logged.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, PlatziError> {
        let response = self.send(method, path, body).await?;
        let status = response.status();

        if !status.is_success() {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!(
                "API request failed with status {}: {}",
                status, response_text
            );
            return Err(PlatziError::Status {
                status: status.as_u16(),
            });
        }

        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&response_bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(
                    "Failed to decode API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(PlatziError::Decode(e))
            }
        }
    }

    /// Make a request and discard the response body; only the status is
    /// inspected.
    ///
    pub(crate) async fn call_discard_body(
        &self,
        method: Method,
        path: &str,
    ) -> Result<(), PlatziError> {
        let response = self.send(method, path, None).await?;
        let status = response.status();
        if !status.is_success() {
            error!("API request failed with status {}", status);
            return Err(PlatziError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response, PlatziError> {
        let request_url = format!("{}/{}", &self.base_url, path);
        debug!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        Ok(request.send().await?)
    }
}
