//! HTTP client for food API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the food REST backend, handling status checks and response parsing.

use super::{FoodId, FoodsError};
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Makes requests to the food backend and tries to conform response data to
/// the given type.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and request timeout.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FoodsError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FoodsError::InvalidUrl(base_url.to_owned()));
        }
        Ok(Client {
            base_url: base_url.to_owned(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Return the deserialized body of a GET request to the path.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FoodsError> {
        let response = self.call(Method::GET, path, None::<&()>).await?;
        let response = check_status(response, None).await?;
        decode(response).await
    }

    /// Send the body as JSON with the given method and return the
    /// deserialized response body. The target id turns a 404 into
    /// `FoodsError::NotFound`.
    ///
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        target: Option<FoodId>,
        body: &B,
    ) -> Result<T, FoodsError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.call(method, path, Some(body)).await?;
        let response = check_status(response, target).await?;
        decode(response).await
    }

    /// Send a DELETE request to the path, ignoring any response body.
    ///
    pub async fn delete(&self, path: &str, target: FoodId) -> Result<(), FoodsError> {
        let response = self.call(Method::DELETE, path, None::<&()>).await?;
        check_status(response, Some(target)).await?;
        Ok(())
    }

    /// Make request and return the raw response or a transport error.
    ///
    async fn call<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, FoodsError> {
        let request_url = format!("{}/{}", &self.base_url, path.trim_start_matches('/'));
        log::trace!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}

/// Map non-success status codes to the matching `FoodsError` variant.
///
async fn check_status(response: Response, target: Option<FoodId>) -> Result<Response, FoodsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        if let Some(id) = target {
            return Err(FoodsError::NotFound { id });
        }
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("Unable to read response"));
    log::error!("API request failed with status {}: {}", status, message);
    Err(FoodsError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Deserialize the response body, logging it if it does not match.
///
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FoodsError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice::<T>(&bytes).map_err(|e| {
        log::error!(
            "Failed to deserialize API response: {}. Response body: {}",
            e,
            String::from_utf8_lossy(&bytes)
        );
        FoodsError::Deserialization(e)
    })
}
