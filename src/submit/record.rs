//! JSON-lines record of accepted submissions

use super::traits::{SinkError, SubmitSink};
use crate::state::LoginCredentials;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// One line of the record file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submitted_at: DateTime<Utc>,
    pub email: String,
}

/// Appends `{submitted_at, email}` per accepted submit. Passwords are not stored.
#[derive(Debug, Clone)]
pub struct RecordSink {
    path: PathBuf,
}

impl RecordSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmitSink for RecordSink {
    fn name(&self) -> &'static str {
        "record"
    }

    async fn accept(&self, credentials: &LoginCredentials) -> Result<(), SinkError> {
        let record = SubmissionRecord {
            submitted_at: Utc::now(),
            email: credentials.email.clone(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Recorded submission to {}", self.path.display());
        Ok(())
    }
}
