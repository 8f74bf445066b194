use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::infrastructure::storage::MediaDir;

/// Spawn the background task that bounds artifact-directory growth: every
/// `interval`, synthesis artifacts older than `ttl` are deleted.
pub fn spawn_artifact_sweeper(
    media: Arc<MediaDir>,
    ttl: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            ttl_secs = ttl.as_secs(),
            interval_secs = interval.as_secs(),
            "Artifact sweeper started"
        );

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match media.sweep_expired(ttl).await {
                Ok(0) => {}
                Ok(removed) => tracing::info!(removed, "Swept expired artifacts"),
                Err(e) => tracing::warn!(error = %e, "Artifact sweep failed"),
            }
        }
    })
}
