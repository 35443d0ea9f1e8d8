//! The binding store: single source of truth for guild ↔ server bindings.
//!
//! Each guild owns one slot file under the store's root directory, so a
//! corrupt slot only ever costs that guild its binding. Mutations write the
//! slot to disk before touching the in-memory map; a failed write leaves
//! both sides on the previous state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tracing::{info, warn};

use super::record::BindingRecord;

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("binding commands must be used inside a guild")]
    InvalidContext,
    #[error("no server is bound to this guild")]
    NotBound,
    #[error("failed to write the binding slot: {0}")]
    Persist(#[from] std::io::Error),
    #[error("failed to encode the binding record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a single slot was skipped during startup load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unreadable slot: {0}")]
    Read(#[from] std::io::Error),
    #[error("corrupt slot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Aggregate result of the startup load pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub failed: usize,
}

pub struct BindingStore {
    root: PathBuf,
    bindings: RwLock<HashMap<String, BindingRecord>>,
}

impl BindingStore {
    /// Creates the storage directory if needed, then loads every persisted
    /// slot concurrently. A slot that fails to read or parse is counted and
    /// skipped; only a missing/unwritable root directory fails startup.
    pub async fn initialize(root: impl Into<PathBuf>) -> std::io::Result<(Self, LoadReport)> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        let mut tasks: JoinSet<(String, Result<BindingRecord, LoadError>)> = JoinSet::new();
        let mut slots = tokio::fs::read_dir(&root).await?;
        while let Some(entry) = slots.next_entry().await? {
            if !entry.file_type().await.map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let Some(guild_id) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            let path = entry.path();
            tasks.spawn(async move {
                let outcome = load_slot(&path).await;
                (guild_id, outcome)
            });
        }

        let mut bindings = HashMap::new();
        let mut report = LoadReport::default();
        while let Some(joined) = tasks.join_next().await {
            let Ok((guild_id, outcome)) = joined else {
                report.failed += 1;
                continue;
            };
            match outcome {
                Ok(record) => {
                    bindings.insert(guild_id, record);
                    report.loaded += 1;
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(target: "bindings.load", guild_id = %guild_id, error = %e, "skipping binding slot");
                }
            }
        }
        info!(target: "bindings.load", loaded = report.loaded, failed = report.failed, "guild bindings loaded");

        Ok((
            Self {
                root,
                bindings: RwLock::new(bindings),
            },
            report,
        ))
    }

    /// Overwrites the guild's binding unconditionally (last write wins).
    /// The slot is persisted before the map is updated, so a write failure
    /// surfaces as an error without leaving memory ahead of disk.
    pub async fn bind(
        &self,
        guild_id: &str,
        server_id: &str,
        server_name: &str,
    ) -> Result<BindingRecord, BindingError> {
        if guild_id.is_empty() {
            return Err(BindingError::InvalidContext);
        }
        let record = BindingRecord::new(server_id, server_name);
        self.persist(guild_id, &record).await?;
        self.bindings
            .write()
            .await
            .insert(guild_id.to_owned(), record.clone());
        Ok(record)
    }

    /// Resets the guild's slot to the unbound shape. Returns the record that
    /// was active so callers can name what they just unbound.
    pub async fn unbind(&self, guild_id: &str) -> Result<BindingRecord, BindingError> {
        let previous = self.get(guild_id).await?;
        let cleared = BindingRecord::cleared();
        self.persist(guild_id, &cleared).await?;
        self.bindings
            .write()
            .await
            .insert(guild_id.to_owned(), cleared);
        Ok(previous)
    }

    /// Read-only view of the guild's current binding.
    pub async fn get(&self, guild_id: &str) -> Result<BindingRecord, BindingError> {
        self.bindings
            .read()
            .await
            .get(guild_id)
            .filter(|record| record.is_bound())
            .cloned()
            .ok_or(BindingError::NotBound)
    }

    /// Serializes a record into the guild's slot file, replacing any prior
    /// content. Write failures surface to the caller, unlike load failures.
    async fn persist(&self, guild_id: &str, record: &BindingRecord) -> Result<(), BindingError> {
        let encoded = serde_json::to_string(record)?;
        tokio::fs::write(self.slot_path(guild_id), encoded).await?;
        Ok(())
    }

    fn slot_path(&self, guild_id: &str) -> PathBuf {
        self.root.join(guild_id)
    }
}

async fn load_slot(path: &Path) -> Result<BindingRecord, LoadError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
