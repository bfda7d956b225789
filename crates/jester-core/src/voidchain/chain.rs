//! The in-memory voidchain.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::record::ChainRecord;
use crate::error::JesterResult;

/// An append-only sequence of blocks.
///
/// Block numbers always equal the record's 1-based position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    records: Vec<ChainRecord>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block stamped with the current time.
    pub fn append(&mut self, event: impl Into<String>, os: Option<String>) -> &ChainRecord {
        let block = self.records.len() as u32 + 1;
        self.records.push(ChainRecord {
            block,
            event: event.into(),
            os,
            timestamp: Utc::now(),
        });
        let record = &self.records[self.records.len() - 1];
        tracing::debug!(block, event = %record.event, "block appended");
        record
    }

    /// All blocks in order.
    pub fn records(&self) -> &[ChainRecord] {
        &self.records
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no block has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty JSON array with two-space indentation.
    pub fn to_json(&self) -> JesterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the chain to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> JesterResult<()> {
        std::fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), blocks = self.len(), "voidchain written");
        Ok(())
    }
}
