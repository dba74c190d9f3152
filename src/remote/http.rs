//! HTTP Plumbing
//!
//! JSON request helpers over gloo-net.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiClient, ApiError};

fn endpoint(client: &ApiClient, path: &str) -> String {
    format!("{}{}", client.base_url(), path)
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }
    response
        .json()
        .await
        .map_err(|error| ApiError::Decode(error.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    token: &str,
) -> Result<T, ApiError> {
    let response = Request::get(&endpoint(client, path))
        .header("X-Api-Key", client.api_key())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let mut builder = Request::post(&endpoint(client, path)).header("X-Api-Key", client.api_key());
    if let Some(token) = token {
        builder = builder.header("Authorization", &bearer(token));
    }
    let response = builder
        .json(body)
        .map_err(|error| ApiError::Network(error.to_string()))?
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    decode(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    body: &B,
    token: &str,
) -> Result<T, ApiError> {
    let response = Request::patch(&endpoint(client, path))
        .header("X-Api-Key", client.api_key())
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|error| ApiError::Network(error.to_string()))?
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    decode(response).await
}

pub async fn delete(client: &ApiClient, path: &str, token: &str) -> Result<(), ApiError> {
    let response = Request::delete(&endpoint(client, path))
        .header("X-Api-Key", client.api_key())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }
    Ok(())
}
