// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::{debug, info};

use crate::client::ComputeApi;
use crate::disks::{DiskAggregate, match_disks};
use crate::errors::Result;
use crate::model::{Disk, Instance};
use crate::totals::ResourceTotals;
use crate::units::to_gib;

/// Options that shape which instances and columns end up in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only instances whose name starts with this prefix are reported.
    /// An empty prefix matches every instance.
    pub name_prefix: String,
    pub include_platform: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            name_prefix: String::new(),
            include_platform: true,
        }
    }
}

impl ReportOptions {
    /// Exact, case-sensitive prefix match on the instance name.
    pub fn matches(&self, instance: &Instance) -> bool {
        self.name_prefix.is_empty() || instance.name.starts_with(&self.name_prefix)
    }
}

/// One output line: the capacity of a single instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    /// `None` when the platform column is disabled.
    pub platform: Option<String>,
    pub cores: u64,
    pub memory_gib: f64,
    pub disks: DiskAggregate,
}

/// Rows in listing order plus the totals over those rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub include_platform: bool,
    pub rows: Vec<Row>,
    pub totals: ResourceTotals,
}

/// Builds the row for one instance from its matched disks.
pub fn project_row(instance: &Instance, disks: DiskAggregate, include_platform: bool) -> Row {
    Row {
        name: instance.name.clone(),
        platform: include_platform.then(|| instance.platform_id.clone()),
        cores: instance.resources.cores,
        memory_gib: to_gib(instance.resources.memory),
        disks,
    }
}

/// Aggregates `instances` and `disks` into a report in a single pass.
///
/// Instances are kept in the order given. Filtered-out instances appear
/// neither in the rows nor in the totals.
pub fn build_report(instances: &[Instance], disks: &[Disk], options: &ReportOptions) -> Report {
    let (rows, totals) = instances
        .iter()
        .filter(|instance| {
            let keep = options.matches(instance);
            if !keep {
                debug!(
                    "skipping instance {} ({}): name does not start with {:?}",
                    instance.name, instance.id, options.name_prefix
                );
            }
            keep
        })
        .map(|instance| {
            project_row(
                instance,
                match_disks(instance, disks),
                options.include_platform,
            )
        })
        .fold(
            (Vec::new(), ResourceTotals::default()),
            |(mut rows, totals), row| {
                let totals = totals.add_snapshot(row.cores, row.memory_gib, &row.disks);
                rows.push(row);
                (rows, totals)
            },
        );

    Report {
        include_platform: options.include_platform,
        rows,
        totals,
    }
}

/// Fetches instances and disks of `folder_id`, then aggregates them.
///
/// Instances are listed before disks; the first failing call aborts the run
/// and nothing is aggregated.
pub async fn collect_report<C: ComputeApi>(
    api: &C,
    folder_id: &str,
    options: &ReportOptions,
) -> Result<Report> {
    let instances = api.list_instances(folder_id).await?;
    let disks = api.list_disks(folder_id).await?;

    let report = build_report(&instances.items, &disks.items, options);
    info!(
        "reporting {} of {} instances in folder {folder_id}",
        report.rows.len(),
        instances.items.len()
    );
    Ok(report)
}
