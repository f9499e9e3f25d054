// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the client crate.

use std::time::Duration;

/// Server address override (`host:port`)
pub fn address() -> Option<String> {
    std::env::var("FTS_ADDR").ok().filter(|s| !s.is_empty())
}

/// Index name override
pub fn index() -> Option<String> {
    std::env::var("FTS_INDEX").ok().filter(|s| !s.is_empty())
}

/// Read timeout override in milliseconds. Unparseable values are ignored.
pub fn read_timeout() -> Option<Duration> {
    std::env::var("FTS_READ_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}
