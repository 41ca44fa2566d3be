//! Background metrics sampler.
//!
//! The sampler runs on its own named thread and is never joined: quitting
//! the UI simply returns from `main` and the thread is abandoned. Nothing it
//! owns needs orderly release (no lock is held across the provider call or
//! the sleep, and each publish is a single store write).

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::system::snapshot::MetricsProvider;
use crate::system::store::SnapshotStore;

pub struct Sampler;

impl Sampler {
    /// Spawn a detached sampler. The provider is built on the sampler
    /// thread, so slow setup (CPU counter priming) never delays the first
    /// redraw.
    pub fn spawn_with<F, P>(factory: F, store: Arc<SnapshotStore>, interval: Duration) -> io::Result<()>
    where
        F: FnOnce() -> Result<P> + Send + 'static,
        P: MetricsProvider,
    {
        let handle = thread::Builder::new()
            .name("sampler".into())
            .spawn(move || {
                let mut provider = match factory() {
                    Ok(p) => p,
                    Err(e) => {
                        tracing::error!("metrics provider setup failed: {e:#}");
                        store.publish_failure(format!("{e:#}"));
                        return;
                    }
                };
                tracing::info!(interval_ms = interval.as_millis() as u64, "sampler started");
                loop {
                    tick(&mut provider, &store);
                    thread::sleep(interval);
                }
            })?;
        // Detached on purpose: the thread lives until process exit.
        drop(handle);
        Ok(())
    }
}

/// One sampler tick: query the provider and publish the outcome.
pub fn tick<P: MetricsProvider + ?Sized>(provider: &mut P, store: &SnapshotStore) {
    match provider.sample() {
        Ok(snapshot) => {
            tracing::debug!(
                cores = snapshot.per_core_usage.len(),
                cpu = snapshot.aggregate_cpu_usage,
                "sample published"
            );
            store.publish(snapshot);
        }
        Err(e) => {
            tracing::error!("metrics sample failed: {e:#}");
            store.publish_failure(format!("{e:#}"));
        }
    }
}
