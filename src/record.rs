//! # Persisted Chart Records
//!
//! On-disk encoding for a saved chart: a `---` fenced metadata block of
//! `key: value` pairs followed by the raw chart body.
//!
//! ```text
//! ---
//! id: '1712345678'
//! title: My Demo Song
//! key: C
//! saved-at: 2026-08-30T12:00:00Z
//! ---
//! V: 1 4 5 1
//! ```
//!
//! The chart body is carried through encode/decode byte for byte, so a
//! record round-trips through the parse/render pipeline unchanged. The
//! core parser and renderer never touch this format; it exists only at
//! the persistence boundary, together with the small directory-backed
//! [`ChartStore`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ast::SongMeta;
use crate::error::ChartError;

const FENCE: &str = "---";
const RECORD_EXTENSION: &str = "nns";

/// A saved chart: identity, song metadata, and the raw notation text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChartRecord {
    /// Absent in plain chart files that carry only song metadata.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(flatten)]
    pub meta: SongMeta,
    /// Save timestamp, as provided by the caller (ISO 8601 by
    /// convention; the store only compares it lexically).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub saved_at: String,
    /// Raw chart notation; not part of the metadata block.
    #[serde(skip)]
    pub chart: String,
}

impl ChartRecord {
    /// Serialize to the fenced textual encoding.
    pub fn encode(&self) -> Result<String, ChartError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| ChartError::RecordError(e.to_string()))?;
        Ok(format!("{}\n{}{}\n{}", FENCE, yaml, FENCE, self.chart))
    }

    /// Parse the fenced textual encoding back into a record.
    ///
    /// The metadata block must open on the first line; everything after
    /// the closing fence line is the chart body, untouched.
    pub fn decode(text: &str) -> Result<Self, ChartError> {
        let rest = text
            .strip_prefix(FENCE)
            .and_then(|r| r.strip_prefix('\n'))
            .ok_or_else(|| {
                ChartError::RecordError("missing opening metadata fence".to_string())
            })?;
        let close = rest.find("\n---").ok_or_else(|| {
            ChartError::RecordError("missing closing metadata fence".to_string())
        })?;

        let yaml = &rest[..close + 1];
        let mut record: ChartRecord = serde_yaml::from_str(yaml)
            .map_err(|e| ChartError::RecordError(e.to_string()))?;

        let after_fence = &rest[close + 1 + FENCE.len()..];
        let body = after_fence.strip_prefix('\n').unwrap_or(after_fence);
        record.chart = body.to_string();
        Ok(record)
    }
}

/// Keep ids usable as filenames.
fn sanitize_id(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// A directory of chart records, one file per chart.
///
/// Persistence collaborator; the core pipeline never depends on it.
#[derive(Debug, Clone)]
pub struct ChartStore {
    dir: PathBuf,
}

impl ChartStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, ChartError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir
            .join(sanitize_id(id))
            .with_extension(RECORD_EXTENSION)
    }

    /// Write a record, replacing any previous save with the same id.
    pub fn save(&self, record: &ChartRecord) -> Result<(), ChartError> {
        if sanitize_id(&record.id).is_empty() {
            return Err(ChartError::RecordError(
                "record id is empty".to_string(),
            ));
        }
        let encoded = record.encode()?;
        fs::write(self.path_for(&record.id), encoded)?;
        Ok(())
    }

    /// Load one record by id.
    pub fn load(&self, id: &str) -> Result<ChartRecord, ChartError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(ChartError::NotFound(id.to_string()));
        }
        ChartRecord::decode(&fs::read_to_string(path)?)
    }

    /// All saved records, most recently saved first.
    ///
    /// Files that no longer decode are skipped rather than failing the
    /// whole listing.
    pub fn list(&self) -> Result<Vec<ChartRecord>, ChartError> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            if let Ok(record) = ChartRecord::decode(&text) {
                records.push(record);
            }
        }
        records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(records)
    }

    /// Delete one record by id.
    pub fn delete(&self, id: &str) -> Result<(), ChartError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(ChartError::NotFound(id.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}
