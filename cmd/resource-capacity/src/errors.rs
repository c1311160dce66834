// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed generate client: {context}")]
    ClientBuild { context: String },

    #[error("failed list instances: {context}")]
    ListInstances { context: String },

    #[error("failed list disks: {context}")]
    ListDisks { context: String },

    #[error("failed generate client: no credentials: pass --token (OAuth) or --iam-token")]
    MissingCredentials,

    #[error("failed generate client: no folder id: pass --folder-id or set folder_id in the config file")]
    MissingFolderId,

    #[error("invalid config file {}: {context}", path.display())]
    Config { path: PathBuf, context: String },

    #[error("failed to write report: {0}")]
    Render(#[from] std::io::Error),

    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
