// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Access to the compute API.
//!
//! Listings are fetched in a single request each. Results beyond the first
//! page are not requested; a truncated listing is reported with a warning.

use std::time::Duration;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::model::{Disk, Instance};

pub const DEFAULT_COMPUTE_ENDPOINT: &str = "https://compute.api.cloud.yandex.net";
pub const DEFAULT_IAM_ENDPOINT: &str = "https://iam.api.cloud.yandex.net";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest page the compute API hands out.
const PAGE_SIZE: &str = "1000";

/// Items of one listing call.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Set when the API has more results than it returned.
    pub next_page_token: Option<String>,
}

impl<T> Listing<T> {
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_token: None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.next_page_token.is_some()
    }
}

/// The two listing calls the report is built from.
#[allow(async_fn_in_trait)]
pub trait ComputeApi {
    async fn list_instances(&self, folder_id: &str) -> Result<Listing<Instance>>;
    async fn list_disks(&self, folder_id: &str) -> Result<Listing<Disk>>;
}

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Passport OAuth token, exchanged for an IAM token on connect.
    OAuth(String),
    /// IAM token used as is.
    Iam(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::OAuth(_) => f.write_str("OAuth(<redacted>)"),
            Credentials::Iam(_) => f.write_str("Iam(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub compute_endpoint: String,
    pub iam_endpoint: String,
    pub timeout: Duration,
    pub credentials: Credentials,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTokenRequest<'a> {
    yandex_passport_oauth_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTokenResponse {
    iam_token: String,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListInstancesResponse {
    instances: Vec<Instance>,
    next_page_token: String,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListDisksResponse {
    disks: Vec<Disk>,
    next_page_token: String,
}

fn non_empty(token: String) -> Option<String> {
    (!token.is_empty()).then_some(token)
}

/// HTTP client for the compute REST API.
pub struct HttpComputeClient {
    client: reqwest::Client,
    compute_endpoint: String,
    iam_token: String,
}

impl HttpComputeClient {
    /// Builds the HTTP client and resolves the IAM token.
    ///
    /// With OAuth credentials this performs one token exchange request.
    pub async fn connect(settings: &ClientSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::ClientBuild {
                context: format!("could not create HTTP client: {e}"),
            })?;

        let iam_token = match &settings.credentials {
            Credentials::Iam(token) => token.clone(),
            Credentials::OAuth(token) => {
                exchange_oauth_token(&client, &settings.iam_endpoint, token)
                    .await
                    .map_err(|context| Error::ClientBuild { context })?
            }
        };

        Ok(Self {
            client,
            compute_endpoint: settings.compute_endpoint.trim_end_matches('/').to_string(),
            iam_token,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        folder_id: &str,
    ) -> std::result::Result<T, String> {
        let url = format!("{}{}", self.compute_endpoint, path);
        debug!("GET {url} folderId={folder_id}");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.iam_token)
            .query(&[("folderId", folder_id), ("pageSize", PAGE_SIZE)])
            .send()
            .await
            .map_err(|e| format!("request to {url} failed: {e}"))?;
        decode_json(response).await
    }
}

impl ComputeApi for HttpComputeClient {
    async fn list_instances(&self, folder_id: &str) -> Result<Listing<Instance>> {
        let response: ListInstancesResponse = self
            .get_json("/compute/v1/instances", folder_id)
            .await
            .map_err(|context| Error::ListInstances { context })?;

        let listing = Listing {
            items: response.instances,
            next_page_token: non_empty(response.next_page_token),
        };
        info!(
            "listed {} instances in folder {folder_id}",
            listing.items.len()
        );
        if listing.is_truncated() {
            warn!("instance listing for folder {folder_id} is truncated, totals are incomplete");
        }
        Ok(listing)
    }

    async fn list_disks(&self, folder_id: &str) -> Result<Listing<Disk>> {
        let response: ListDisksResponse = self
            .get_json("/compute/v1/disks", folder_id)
            .await
            .map_err(|context| Error::ListDisks { context })?;

        let listing = Listing {
            items: response.disks,
            next_page_token: non_empty(response.next_page_token),
        };
        info!("listed {} disks in folder {folder_id}", listing.items.len());
        if listing.is_truncated() {
            warn!("disk listing for folder {folder_id} is truncated, totals are incomplete");
        }
        Ok(listing)
    }
}

async fn exchange_oauth_token(
    client: &reqwest::Client,
    iam_endpoint: &str,
    oauth_token: &str,
) -> std::result::Result<String, String> {
    let url = format!("{}/iam/v1/tokens", iam_endpoint.trim_end_matches('/'));
    debug!("exchanging OAuth token at {url}");
    let response = client
        .post(&url)
        .json(&CreateTokenRequest {
            yandex_passport_oauth_token: oauth_token,
        })
        .send()
        .await
        .map_err(|e| format!("request to {url} failed: {e}"))?;
    let token: CreateTokenResponse = decode_json(response).await?;
    Ok(token.iam_token)
}

async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> std::result::Result<T, String> {
    let status = response.status();
    let url = response.url().clone();
    let body = response
        .text()
        .await
        .map_err(|e| format!("reading response from {url} failed: {e}"))?;
    if !status.is_success() {
        return Err(format!("{url} returned {status}: {}", body.trim()));
    }
    serde_json::from_str(&body).map_err(|e| format!("invalid response from {url}: {e}"))
}
