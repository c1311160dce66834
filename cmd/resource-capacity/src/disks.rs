// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::debug;

use crate::model::{Disk, DiskType, Instance};
use crate::units::to_gib;

/// Network disk capacity attached to a single instance, in GiB.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskAggregate {
    pub hdd_gib: f64,
    pub ssd_gib: f64,
}

impl DiskAggregate {
    fn add(mut self, disk_type: &DiskType, gib: f64) -> Self {
        match disk_type {
            DiskType::NetworkHdd => self.hdd_gib += gib,
            DiskType::NetworkSsd => self.ssd_gib += gib,
            DiskType::Unknown | DiskType::Other(_) => {}
        }
        self
    }
}

/// Sums the disks attached to `instance` by storage class.
///
/// A disk shared by several instances is counted in full for each of them.
/// Disks of any other storage class are ignored.
pub fn match_disks(instance: &Instance, disks: &[Disk]) -> DiskAggregate {
    disks
        .iter()
        .flat_map(|disk| {
            disk.instance_ids
                .iter()
                .filter(move |id| **id == instance.id)
                .map(move |_| disk)
        })
        .fold(DiskAggregate::default(), |aggregate, disk| {
            debug!(
                "disk {} ({}, {} bytes) attached to instance {}",
                disk.id,
                disk.type_id.as_str(),
                disk.size,
                instance.id
            );
            aggregate.add(&disk.type_id, to_gib(disk.size))
        })
}
