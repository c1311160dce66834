// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Correctness
#![deny(clippy::indexing_slicing)]
#![deny(clippy::string_slice)]
#![deny(clippy::cast_possible_wrap)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod cli;
pub mod client;
pub mod config;
mod disks;
mod errors;
mod model;
mod render;
mod report;
mod totals;
pub mod units;

// Re-export the public API
pub use client::{ComputeApi, Credentials, HttpComputeClient, Listing};
pub use disks::{DiskAggregate, match_disks};
pub use errors::{Error, Result};
pub use model::{Disk, DiskType, Instance, Resources};
pub use render::{CsvOptions, CsvRenderer, OutputFormat, Renderer, TableRenderer, format_gib};
pub use report::{Report, ReportOptions, Row, build_report, collect_report, project_row};
pub use totals::ResourceTotals;
