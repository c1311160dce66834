// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::render::OutputFormat;

/// Command line flags. Unset options fall back to the config file, then to
/// built-in defaults (see [`crate::config::Config::resolve`]).
#[derive(Parser, Debug, Default)]
#[command(name = "resource-capacity")]
#[command(
    about = "Reports CPU, RAM and network disk capacity of the instances in a folder",
    long_about = None,
    version
)]
pub struct Args {
    /// Folder to list instances and disks from
    #[arg(long, env = "YC_FOLDER_ID")]
    pub folder_id: Option<String>,

    /// OAuth token, exchanged for an IAM token before listing
    #[arg(long, env = "YC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// IAM token, used as is (takes precedence over --token)
    #[arg(long, env = "YC_IAM_TOKEN", hide_env_values = true)]
    pub iam_token: Option<String>,

    /// Only report instances whose name starts with this prefix
    #[arg(long)]
    pub instance_name_prefix: Option<String>,

    /// Output format [default: table]
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Leave out the platform column
    #[arg(long)]
    pub no_platform: bool,

    /// Start CSV output with a header line
    #[arg(long)]
    pub csv_header: bool,

    /// End CSV output with a totals line
    #[arg(long)]
    pub csv_totals: bool,

    /// Compute API base URL
    #[arg(long, env = "YC_COMPUTE_ENDPOINT")]
    pub compute_endpoint: Option<String>,

    /// IAM API base URL, used for the OAuth token exchange
    #[arg(long, env = "YC_IAM_ENDPOINT")]
    pub iam_endpoint: Option<String>,

    /// Per-request timeout
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log level (logs go to stderr) [default: warn]
    #[arg(long, env = "RESOURCE_CAPACITY_LOG_LEVEL")]
    pub log_level: Option<LevelFilter>,

    /// YAML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
