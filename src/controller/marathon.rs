// Copyright (c) 2025 - Cowboy AI, Inc.
//! Marathon client for application descriptors

use serde::Deserialize;
use tracing::debug;

use super::http::JsonHttp;
use crate::config::ClusterConfig;
use crate::domain::AppDescriptor;
use crate::errors::FaultDomainResult;

const APPS_PATH: &str = "/service/marathon/v2/apps";

#[derive(Debug, Deserialize)]
struct AppResponse {
    app: AppDescriptor,
}

/// Fetches application descriptors, including their tasks, from Marathon
#[derive(Debug, Clone)]
pub struct MarathonClient {
    http: JsonHttp,
}

impl MarathonClient {
    pub fn new(config: &ClusterConfig) -> FaultDomainResult<Self> {
        Ok(Self {
            http: JsonHttp::new(config)?,
        })
    }

    /// Fetch an app with its tasks embedded
    pub async fn get_app(&self, app_id: &str) -> FaultDomainResult<AppDescriptor> {
        let response: AppResponse = self.http.get(&app_path(app_id)).await?;
        debug!(
            "Marathon app {} has {} tasks",
            response.app.id,
            response.app.tasks.len()
        );
        Ok(response.app)
    }
}

/// `/service/marathon/v2/apps/<encoded segments>?embed=app.tasks`
fn app_path(app_id: &str) -> String {
    let mut path = APPS_PATH.to_string();
    for segment in app_id.split('/').filter(|s| !s.is_empty()) {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path.push_str("?embed=app.tasks");
    path
}
