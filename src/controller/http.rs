// Copyright (c) 2025 - Cowboy AI, Inc.
//! JSON-over-HTTP plumbing shared by the cluster clients

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::ClusterConfig;
use crate::errors::{FaultDomainError, FaultDomainResult};

/// Authenticated JSON GET client rooted at the cluster URL
#[derive(Debug, Clone)]
pub(crate) struct JsonHttp {
    base_url: String,
    client: Client,
}

impl JsonHttp {
    pub(crate) fn new(config: &ClusterConfig) -> FaultDomainResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.acs_token {
            let value = HeaderValue::from_str(&format!("token={}", token)).map_err(|e| {
                FaultDomainError::Configuration(format!("Invalid ACS token: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                FaultDomainError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            client,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> FaultDomainResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            FaultDomainError::ControllerUnavailable(format!("GET {} failed: {}", url, e))
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FaultDomainError::ControllerUnavailable(format!(
                "GET {} returned {}: {}",
                url, status, body
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
