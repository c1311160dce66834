// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! In-process HTTP responder serving canned JSON bodies by request path.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::CONTENT_TYPE;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string.
    pub target: String,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> &str {
        self.target.split_once('?').map(|(_, q)| q).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(path: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            path,
            status,
            body: body.into(),
        }
    }
}

pub struct CannedServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl CannedServer {
    /// Binds to an ephemeral port and serves `responses` until the runtime
    /// shuts down. Unknown paths get a 404.
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(responses);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let io = TokioIo::new(stream);
                let responses = Arc::clone(&responses);
                let recorded = Arc::clone(&recorded);

                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        let responses = Arc::clone(&responses);
                        let recorded = Arc::clone(&recorded);
                        async move { respond(req, &responses, &recorded).await }
                    });
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

// Requests are recorded before answering so callers see them once the
// response arrives.
async fn respond(
    req: Request<Incoming>,
    responses: &[CannedResponse],
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let (parts, body) = req.into_parts();
    let body = body.collect().await?.to_bytes();

    let request = RecordedRequest {
        method: parts.method.to_string(),
        target: parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path().to_string(), |pq| pq.as_str().to_string()),
        headers: parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let (status, payload) = responses
        .iter()
        .find(|r| r.path == request.path())
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, r#"{"message": "not found"}"#.to_string()));
    recorded.lock().unwrap().push(request);

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(payload)))
        .unwrap())
}

pub const INSTANCES_JSON: &str = r#"{
  "instances": [
    {
      "id": "fhm-web-1",
      "folderId": "b1gfolder",
      "name": "web-1",
      "platformId": "standard-v3",
      "resources": {"memory": "4294967296", "cores": "2", "coreFraction": "100"},
      "status": "RUNNING"
    },
    {
      "id": "fhm-db-1",
      "folderId": "b1gfolder",
      "name": "db-1",
      "platformId": "standard-v2",
      "resources": {"memory": "17179869184", "cores": "8", "coreFraction": "100"},
      "status": "RUNNING"
    }
  ]
}"#;

pub const DISKS_JSON: &str = r#"{
  "disks": [
    {"id": "epd-boot-web", "typeId": "network-ssd", "size": "21474836480", "instanceIds": ["fhm-web-1"]},
    {"id": "epd-data-db", "typeId": "network-hdd", "size": "107374182400", "instanceIds": ["fhm-db-1"]},
    {"id": "epd-shared", "typeId": "network-ssd", "size": "10737418240", "instanceIds": ["fhm-web-1", "fhm-db-1"]},
    {"id": "epd-fast", "typeId": "network-ssd-nonreplicated", "size": "99857989632", "instanceIds": ["fhm-db-1"]},
    {"id": "epd-spare", "typeId": "network-hdd", "size": "1073741824"}
  ]
}"#;
