// Copyright (c) 2025 - Cowboy AI, Inc.
//! Loading app and group definitions from a file or URL

use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::{FaultDomainError, FaultDomainResult};

/// Request timeout of the client [`load_resource`] builds
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load a JSON resource
///
/// `resource` is tried as a local file first. Anything that is not an
/// existing file is fetched as an http(s) URL, where any failure (transport,
/// non-200 status, invalid JSON) is reported as
/// [`FaultDomainError::ResourceUnavailable`].
///
/// Each call builds a fresh client with [`DEFAULT_FETCH_TIMEOUT`]. Use
/// [`load_resource_with`] to share a client or pick another timeout.
///
/// # Errors
/// - [`FaultDomainError::ResourceUnavailable`] when the file cannot be read or
///   the URL cannot be fetched
/// - [`FaultDomainError::Deserialization`] when a local file is not valid JSON
pub async fn load_resource(resource: &str) -> FaultDomainResult<Value> {
    let client = reqwest::Client::builder()
        .timeout(DEFAULT_FETCH_TIMEOUT)
        .build()
        .map_err(|e| unavailable(resource, e))?;
    load_resource_with(&client, resource).await
}

/// Load a JSON resource, fetching URLs through `client`
///
/// Same lookup and errors as [`load_resource`]; the request timeout is
/// whatever `client` was built with.
pub async fn load_resource_with(
    client: &reqwest::Client,
    resource: &str,
) -> FaultDomainResult<Value> {
    if Path::new(resource).is_file() {
        debug!("Loading resource from file {}", resource);
        let contents = tokio::fs::read_to_string(resource)
            .await
            .map_err(|e| unavailable(resource, e))?;
        return Ok(serde_json::from_str(&contents)?);
    }

    debug!("Loading resource from URL {}", resource);
    fetch(client, resource)
        .await
        .map_err(|e| unavailable(resource, e))
}

async fn fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    let response = client.get(url).send().await?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(format!("status {}", response.status()).into());
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn unavailable(resource: &str, cause: impl std::fmt::Display) -> FaultDomainError {
    warn!("Resource {} unavailable: {}", resource, cause);
    FaultDomainError::ResourceUnavailable(format!(
        "Can't read from resource: {}. Please check that it exists.",
        resource
    ))
}
