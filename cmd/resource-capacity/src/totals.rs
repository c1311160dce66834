// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::disks::DiskAggregate;

/// Running totals over every instance included in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceTotals {
    pub cores: u64,
    pub memory_gib: f64,
    pub disks: DiskAggregate,
}

impl ResourceTotals {
    /// Returns the totals with one more instance snapshot added.
    #[must_use]
    pub fn add_snapshot(self, cores: u64, memory_gib: f64, disks: &DiskAggregate) -> Self {
        Self {
            cores: self.cores.saturating_add(cores),
            memory_gib: self.memory_gib + memory_gib,
            disks: DiskAggregate {
                hdd_gib: self.disks.hdd_gib + disks.hdd_gib,
                ssd_gib: self.disks.ssd_gib + disks.ssd_gib,
            },
        }
    }
}
