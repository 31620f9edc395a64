//! Task lookup and polling
//!
//! Asynchronous API operations hand back a task id. These methods fetch the
//! task's current snapshot and can block until it reaches a terminal status.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::value::RawValue;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::StratusClient;
use crate::error::{ClientError, Result};
use stratus_core::domain::task::Task;

/// Task operations exposed by the API client
///
/// Lets downstream code substitute a fake service where a real endpoint is
/// out of reach.
#[async_trait]
pub trait TaskService {
    /// Fetch the current snapshot of a task
    async fn find(&self, id: &str) -> Result<Task>;

    /// Block until the task reaches a terminal status and return its raw
    /// result payload
    async fn poll(&self, id: &str, interval: Duration) -> Result<Option<Box<RawValue>>>;
}

impl StratusClient {
    /// Fetch a task by id
    ///
    /// The id is forwarded as-is; a malformed or unknown id is rejected by
    /// the server and surfaces as an error.
    ///
    /// # Arguments
    /// * `id` - The task id
    ///
    /// # Returns
    /// The current task snapshot
    pub async fn find_task(&self, id: &str) -> Result<Task> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        self.handle_envelope(response).await
    }

    /// Poll a task until it completes
    ///
    /// Looks the task up immediately, then re-checks on every tick of
    /// `interval` until the task leaves the pending state. Blocks the caller;
    /// the first lookup error abandons the poll. A task that completed with
    /// a failure status is not an error here - inspect the status via
    /// [`StratusClient::find_task`] when that distinction matters.
    ///
    /// # Arguments
    /// * `id` - The task id
    /// * `interval` - Delay between consecutive lookups; must be non-zero
    ///
    /// # Returns
    /// The task's raw result payload, absent when the task completed
    /// without one
    ///
    /// # Example
    /// ```no_run
    /// # use std::time::Duration;
    /// # use stratus_client::StratusClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = StratusClient::new("http://localhost:8080");
    /// let payload = client.poll_task("0e12f8a4", Duration::from_secs(1)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn poll_task(&self, id: &str, interval: Duration) -> Result<Option<Box<RawValue>>> {
        self.poll_task_with_cancel(id, interval, CancellationToken::new())
            .await
    }

    /// Poll a task until it completes or the token is cancelled
    ///
    /// Same contract as [`StratusClient::poll_task`], with an external escape
    /// hatch: cancelling the token aborts the wait at the next suspension
    /// point and returns [`ClientError::Cancelled`] without another lookup.
    pub async fn poll_task_with_cancel(
        &self,
        id: &str,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Result<Option<Box<RawValue>>> {
        if interval.is_zero() {
            return Err(ClientError::InvalidInterval);
        }

        info!("Polling task {} (interval: {:?})", id, interval);

        // The first tick fires immediately, so the initial lookup is eager.
        let mut ticker = time::interval(interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                _ = ticker.tick() => {}
            }

            let task = self.find_task(id).await?;

            if task.is_completed() {
                info!("Task {} completed with status {}", id, task.status);
                return Ok(task.result);
            }

            debug!("Task {} still pending", id);
        }
    }
}

#[async_trait]
impl TaskService for StratusClient {
    async fn find(&self, id: &str) -> Result<Task> {
        self.find_task(id).await
    }

    async fn poll(&self, id: &str, interval: Duration) -> Result<Option<Box<RawValue>>> {
        self.poll_task(id, interval).await
    }
}
