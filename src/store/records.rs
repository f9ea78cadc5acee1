use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use crate::detection::classifier::Classification;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access record store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse record store: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to replace record store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Store file version for compatibility checking
pub const STORE_VERSION: &str = "1.0.0";

/// One classified DNA submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanRecord {
    /// DNA fingerprint
    pub id: String,
    pub is_mutant: bool,
}

impl From<&Classification> for HumanRecord {
    fn from(classification: &Classification) -> Self {
        Self {
            id: classification.id.clone(),
            is_mutant: classification.is_mutant,
        }
    }
}

/// Aggregate counts over every stored record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DnaStats {
    pub count_mutant_dna: usize,
    pub count_human_dna: usize,
    /// Total records per mutant record, 0 when there are no mutants
    pub ratio: f64,
}

impl DnaStats {
    #[must_use]
    pub fn from_counts(count_mutant_dna: usize, count_human_dna: usize) -> Self {
        #[allow(clippy::cast_precision_loss)] // Record counts stay far below 2^52
        let ratio = if count_mutant_dna == 0 {
            0.0
        } else {
            count_human_dna as f64 / count_mutant_dna as f64
        };

        Self {
            count_mutant_dna,
            count_human_dna,
            ratio,
        }
    }
}

/// Serializable store format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    pub version: String,
    pub updated_at: String,
    pub records: Vec<HumanRecord>,
}

/// Thread-safe record store, optionally mirrored to a JSON file.
///
/// Records are keyed by DNA fingerprint: saving the same DNA twice keeps a
/// single record.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<HashMap<String, HumanRecord>>,
    path: Option<PathBuf>,
}

impl RecordStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store, loading existing records if the file exists
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let records = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::records_from_json(&content)?
        } else {
            tracing::info!("Record store {} not found, starting empty", path.display());
            HashMap::new()
        };

        tracing::debug!(
            "Opened record store {} with {} records",
            path.display(),
            records.len()
        );

        Ok(Self {
            records: RwLock::new(records),
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse a store from its JSON representation
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid store document.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(Self {
            records: RwLock::new(Self::records_from_json(json)?),
            path: None,
        })
    }

    fn records_from_json(json: &str) -> Result<HashMap<String, HumanRecord>, StoreError> {
        let data: StoreData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != STORE_VERSION {
            tracing::warn!(
                "Record store version mismatch (expected {}, found {})",
                STORE_VERSION,
                data.version
            );
        }

        Ok(data
            .records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect())
    }

    /// Insert or replace a record, then write the store file if there is one
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written. The in-memory
    /// store is then left as it was before the call.
    pub fn save(&self, record: HumanRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!("Saving record {} (mutant: {})", record.id, record.is_mutant);
        let id = record.id.clone();
        let previous = records.insert(id.clone(), record);

        // File is rewritten under the write lock so snapshots land in order
        let Some(path) = &self.path else {
            return Ok(());
        };
        let written = Self::serialize(&records).and_then(|json| write_atomically(path, &json));

        if let Err(e) = written {
            match previous {
                Some(old) => records.insert(id, old),
                None => records.remove(&id),
            };
            return Err(e);
        }

        Ok(())
    }

    /// Look up a record by DNA fingerprint
    #[must_use]
    pub fn get(&self, id: &str) -> Option<HumanRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Current aggregate counts
    #[must_use]
    pub fn stats(&self) -> DnaStats {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let mutants = records.values().filter(|r| r.is_mutant).count();
        DnaStats::from_counts(mutants, records.len())
    }

    /// Export the store to JSON, records sorted by id
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Self::serialize(&records)
    }

    fn serialize(records: &HashMap<String, HumanRecord>) -> Result<String, StoreError> {
        let mut sorted: Vec<HumanRecord> = records.values().cloned().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));

        let data = StoreData {
            version: STORE_VERSION.to_string(),
            updated_at: chrono::Utc::now().to_rfc3339(),
            records: sorted,
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of records in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Backing file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Write to a temp file in the target directory, then rename over the target
fn write_atomically(path: &Path, content: &str) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;
    Ok(())
}
