//! Configuration Module
//!
//! Loads cache and workload settings from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_capacity: usize,
    /// Number of threads driving the demo workload
    pub worker_threads: usize,
    /// Operations each worker performs
    pub ops_per_worker: usize,
    /// Number of distinct keys the workload draws from
    pub key_space: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `WORKER_THREADS` - Workload threads (default: 4)
    /// - `OPS_PER_WORKER` - Operations per thread (default: 10000)
    /// - `KEY_SPACE` - Distinct keys in the workload (default: 2000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_capacity: env_or("MAX_CAPACITY", defaults.max_capacity),
            worker_threads: env_or("WORKER_THREADS", defaults.worker_threads),
            ops_per_worker: env_or("OPS_PER_WORKER", defaults.ops_per_worker),
            key_space: env_or("KEY_SPACE", defaults.key_space),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_capacity: 1000,
            worker_threads: 4,
            ops_per_worker: 10_000,
            key_space: 2000,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
