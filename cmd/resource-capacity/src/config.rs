// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::Path;
use std::time::Duration;

use log::{LevelFilter, debug};
use serde::Deserialize;

use crate::cli::Args;
use crate::client::{
    ClientSettings, Credentials, DEFAULT_COMPUTE_ENDPOINT, DEFAULT_IAM_ENDPOINT, DEFAULT_TIMEOUT,
};
use crate::errors::{Error, Result};
use crate::render::{CsvOptions, OutputFormat};
use crate::report::ReportOptions;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Settings read from the YAML config file. Every key is optional.
///
/// Credentials are not read from the file. Unknown keys, `token` included,
/// are rejected.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub folder_id: Option<String>,
    pub instance_name_prefix: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub include_platform: Option<bool>,
    pub csv_header: Option<bool>,
    pub csv_totals: Option<bool>,
    pub compute_endpoint: Option<String>,
    pub iam_endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

/// Loads the YAML config file at `path`. An empty file yields the defaults.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let config_error = |context: String| Error::Config {
        path: path.to_path_buf(),
        context,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    if contents.trim().is_empty() {
        debug!("config file {} is empty", path.display());
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| config_error(e.to_string()))
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub folder_id: String,
    pub report: ReportOptions,
    pub output_format: OutputFormat,
    pub csv: CsvOptions,
    pub client: ClientSettings,
    pub log_level: LevelFilter,
}

impl Config {
    /// Merges command line flags (which already include environment
    /// variables) over the config file and the built-in defaults.
    pub fn resolve(args: Args, file: FileConfig) -> Result<Self> {
        let log_level = match (args.log_level, file.log_level) {
            (Some(level), _) => level,
            (None, Some(level)) => level.parse().map_err(|_| Error::Config {
                path: args.config.clone().unwrap_or_default(),
                context: format!("invalid log_level {level:?}"),
            })?,
            (None, None) => DEFAULT_LOG_LEVEL,
        };

        let folder_id = args
            .folder_id
            .or(file.folder_id)
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingFolderId)?;

        let credentials = match (args.iam_token, args.token) {
            (Some(iam), _) if !iam.is_empty() => Credentials::Iam(iam),
            (_, Some(oauth)) if !oauth.is_empty() => Credentials::OAuth(oauth),
            _ => return Err(Error::MissingCredentials),
        };

        let include_platform = if args.no_platform {
            false
        } else {
            file.include_platform.unwrap_or(true)
        };

        let timeout = args
            .timeout
            .or(file.request_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self {
            folder_id,
            report: ReportOptions {
                name_prefix: args
                    .instance_name_prefix
                    .or(file.instance_name_prefix)
                    .unwrap_or_default(),
                include_platform,
            },
            output_format: args.output_format.or(file.output_format).unwrap_or_default(),
            csv: CsvOptions {
                header: args.csv_header || file.csv_header.unwrap_or(false),
                totals: args.csv_totals || file.csv_totals.unwrap_or(false),
            },
            client: ClientSettings {
                compute_endpoint: args
                    .compute_endpoint
                    .or(file.compute_endpoint)
                    .unwrap_or_else(|| DEFAULT_COMPUTE_ENDPOINT.to_string()),
                iam_endpoint: args
                    .iam_endpoint
                    .or(file.iam_endpoint)
                    .unwrap_or_else(|| DEFAULT_IAM_ENDPOINT.to_string()),
                timeout,
                credentials,
            },
            log_level,
        })
    }
}
