// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Instance and disk records as returned by the compute API.
//!
//! The API encodes 64-bit integers as JSON strings, so the numeric fields go
//! through [`int64`], which accepts both strings and plain numbers.

use serde::{Deserialize, Deserializer};

/// A virtual machine instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub id: String,
    pub name: String,
    /// Hardware generation the instance runs on, e.g. `standard-v3`.
    pub platform_id: String,
    pub resources: Resources,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resources {
    #[serde(deserialize_with = "int64::deserialize")]
    pub cores: u64,
    /// Memory size in bytes.
    #[serde(deserialize_with = "int64::deserialize")]
    pub memory: u64,
}

/// A block storage disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disk {
    pub id: String,
    pub name: String,
    pub type_id: DiskType,
    /// Size in bytes.
    #[serde(deserialize_with = "int64::deserialize")]
    pub size: u64,
    /// Instances the disk is currently attached to.
    pub instance_ids: Vec<String>,
}

/// Storage class of a disk. Only the two network classes are aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DiskType {
    NetworkHdd,
    NetworkSsd,
    #[default]
    Unknown,
    Other(String),
}

impl DiskType {
    pub fn as_str(&self) -> &str {
        match self {
            DiskType::NetworkHdd => "network-hdd",
            DiskType::NetworkSsd => "network-ssd",
            DiskType::Unknown => "",
            DiskType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for DiskType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "network-hdd" => DiskType::NetworkHdd,
            "network-ssd" => DiskType::NetworkSsd,
            "" => DiskType::Unknown,
            _ => DiskType::Other(s),
        }
    }
}

impl From<&str> for DiskType {
    fn from(s: &str) -> Self {
        DiskType::from(s.to_string())
    }
}

mod int64 {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Int64 {
        Number(u64),
        String(String),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Int64::deserialize(deserializer)? {
            Int64::Number(n) => Ok(n),
            Int64::String(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
