// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use resource_capacity::cli::Args;
use resource_capacity::config::{Config, FileConfig, load_file_config};
use resource_capacity::{HttpComputeClient, Renderer, collect_report};
use simple_logger::SimpleLogger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let file = match &args.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    let config = Config::resolve(args, file)?;

    SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .context("failed to initialize logger")?;
    debug!("resolved config: {config:?}");

    let client = HttpComputeClient::connect(&config.client).await?;
    let report = collect_report(&client, &config.folder_id, &config.report).await?;

    // Render fully before touching stdout so a failure leaves no partial output.
    let mut output = Vec::new();
    config
        .output_format
        .renderer(config.csv)
        .render(&report, &mut output)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&output)
        .context("failed to write report to stdout")?;
    stdout.flush().context("failed to write report to stdout")?;

    info!(
        "wrote {} rows as {:?}",
        report.rows.len(),
        config.output_format
    );
    Ok(())
}
