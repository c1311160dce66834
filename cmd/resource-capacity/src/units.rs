// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

/// Number of bytes in one binary gigabyte (2^30).
pub const BYTES_PER_GIB: u64 = 1 << 30;

/// Converts a raw byte count into binary gigabytes.
///
/// No rounding happens here; values are only rounded when rendered.
pub fn to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB as f64
}
