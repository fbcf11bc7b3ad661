//! Data Cache - workload driver
//!
//! Runs a multi-threaded get/put workload against a bounded cache and
//! prints the resulting statistics as JSON.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context};
use rand::Rng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use data_cache::{BoundedLruCache, Config};

/// Main entry point for the workload driver.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache and register an eviction counter
/// 4. Run the workload on the configured number of threads
/// 5. Shrink the cache to half its capacity
/// 6. Print statistics and clear the cache
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_capacity={}, worker_threads={}, ops_per_worker={}, key_space={}",
        config.max_capacity, config.worker_threads, config.ops_per_worker, config.key_space
    );

    let cache: Arc<BoundedLruCache<u64, String>> =
        Arc::new(BoundedLruCache::from_config(&config).context("invalid cache configuration")?);

    let evicted = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&evicted);
    cache.subscribe_on_evicted(move |_: &String| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let started = Instant::now();
    run_workload(&cache, &config)?;
    info!("Workload finished in {:?}", started.elapsed());

    let half = (config.max_capacity / 2).max(1);
    cache.resize(half)?;

    let stats = cache.stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    info!(
        "hit_rate={:.3}, evictions observed by subscriber={}",
        stats.hit_rate(),
        evicted.load(Ordering::Relaxed)
    );

    cache.clear();
    info!("Cache cleared, shutdown complete");
    Ok(())
}

/// Spawns one thread per worker, each mixing reads and writes over the key space.
fn run_workload(cache: &Arc<BoundedLruCache<u64, String>>, config: &Config) -> anyhow::Result<()> {
    let key_space = config.key_space.max(1);
    let ops = config.ops_per_worker;

    let handles: Vec<_> = (0..config.worker_threads)
        .map(|worker| {
            let cache = Arc::clone(cache);
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for _ in 0..ops {
                    let key = rng.gen_range(0..key_space);
                    if rng.gen_bool(0.7) {
                        if cache.try_get(&key).is_none() {
                            cache.put(key, format!("value-{}-{}", worker, key));
                        }
                    } else {
                        cache.put(key, format!("value-{}-{}", worker, key));
                    }
                }
                debug!(worker, "worker done");
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("workload thread panicked"))?;
    }
    Ok(())
}
