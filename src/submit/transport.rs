//! Submission transports
//!
//! A [`Submitter`] delivers a validated [`Submission`] somewhere. The site has
//! no backend, so the default transport only simulates network latency and
//! always succeeds. The outbox transport appends each submission to a JSON
//! lines file for later processing, and can fail like a real transport.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::error::{SubmitError, SubmitResult};
use super::model::Submission;
use crate::config::{ContactConfig, TransportKind};

/// Largest serialized record the outbox accepts
pub const MAX_RECORD_BYTES: usize = 64 * 1024;

/// Acknowledgement for a delivered submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub transport: &'static str,
}

impl Receipt {
    fn new(transport: &'static str) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            transport,
        }
    }
}

/// Delivers form submissions.
///
/// Implementations are shared across request handlers and must be safe to
/// call concurrently.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver a submission, returning a receipt on success.
    async fn submit(&self, submission: &Submission) -> SubmitResult<Receipt>;

    /// Short transport name used in logs and receipts
    fn name(&self) -> &'static str;
}

/// Waits a fixed delay, then reports success without sending anything
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &Submission) -> SubmitResult<Receipt> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(
            "Simulated {} submission after {:?}",
            submission.kind(),
            self.delay
        );
        Ok(Receipt::new(self.name()))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// One line of the outbox file
#[derive(Debug, Serialize)]
struct OutboxRecord<'a> {
    id: Uuid,
    received_at: DateTime<Utc>,
    #[serde(flatten)]
    submission: &'a Submission,
}

/// Appends submissions to a JSON lines file
pub struct OutboxSubmitter {
    path: PathBuf,
    // Serializes appends so concurrent lines never interleave
    lock: Mutex<()>,
}

impl OutboxSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Submitter for OutboxSubmitter {
    async fn submit(&self, submission: &Submission) -> SubmitResult<Receipt> {
        // The outbox is read by other tools, keep garbage out of it
        submission.validate()?;

        let receipt = Receipt::new(self.name());
        let record = OutboxRecord {
            id: receipt.id,
            received_at: receipt.received_at,
            submission,
        };
        let mut line = serde_json::to_string(&record)?;
        if line.len() > MAX_RECORD_BYTES {
            return Err(SubmitError::Rejected(format!(
                "record is {} bytes, limit is {}",
                line.len(),
                MAX_RECORD_BYTES
            )));
        }
        line.push('\n');

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(
            "Appended {} submission {} to {:?}",
            submission.kind(),
            receipt.id,
            self.path
        );
        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "outbox"
    }
}

/// Build the configured transport. A relative outbox path is resolved
/// against `base_dir`.
pub fn from_config(config: &ContactConfig, base_dir: &Path) -> Arc<dyn Submitter> {
    match config.transport {
        TransportKind::Simulated => {
            Arc::new(SimulatedSubmitter::new(Duration::from_millis(config.delay_ms)))
        }
        TransportKind::Outbox => Arc::new(OutboxSubmitter::new(base_dir.join(&config.outbox_path))),
    }
}
