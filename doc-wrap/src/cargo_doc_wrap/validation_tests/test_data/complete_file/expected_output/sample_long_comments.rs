// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Connection pooling for the storage layer. The pool hands out connections to callers, recycles 
//! the ones that are returned in a healthy state, and drops the ones that report an error. 
//!
//! Short inner line. 

use std::time::Duration;

/// Settings that control how the pool grows, shrinks, and retries when the backing server is slow 
/// to answer or refuses connections. 
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections. 
    pub max_size: usize,
    /// How long a caller waits for a free connection before the request fails with a timeout error 
    /// instead of blocking forever. 
    pub checkout_timeout: Duration,
}

impl PoolConfig {
    /// Creates a configuration with conservative defaults that are suitable for local development 
    /// and small test deployments. 
    pub fn new() -> Self {
        Self {
            max_size: 8,
            checkout_timeout: Duration::from_secs(5),
        }
    }
}

// An ordinary comment that is far longer than eighty columns and must never be touched by the wrapper at all.
/// / A line with four slashes matches the doc comment pattern too, so its words are re-flowed like 
/// any other doc comment line. 
