use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};

/// Write access to emitted documents by output-relative path, e.g.
/// "pokemon/details/bulbasaur.json", "manifest.json".
pub trait DocumentSink: Send {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()>;

    /// Remove every document below `rel_dir`. Clearing a missing directory is not an error.
    fn clear(&mut self, rel_dir: &str) -> Result<()>;
}

/// Output directory on disk.
pub struct DiskSink {
    root: PathBuf,
}

impl DiskSink {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl DocumentSink for DiskSink {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        let path = self.full(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn clear(&mut self, rel_dir: &str) -> Result<()> {
        let path = self.full(rel_dir);
        if path.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to clear {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory output, keyed by relative path in sorted order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemSink {
    pub files: BTreeMap<String, Vec<u8>>,
}

impl MemSink {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, rel: &str) -> Result<&[u8]> {
        self.files.get(rel).map(Vec::as_slice)
            .ok_or_else(|| anyhow!("missing output file: {rel}"))
    }

    /// Parse an emitted document back into JSON.
    pub fn json(&self, rel: &str) -> Result<serde_json::Value> {
        serde_json::from_slice(self.get(rel)?)
            .with_context(|| format!("Failed to parse {rel}"))
    }
}

impl DocumentSink for MemSink {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        self.files.insert(rel.to_string(), bytes.to_vec());
        Ok(())
    }

    fn clear(&mut self, rel_dir: &str) -> Result<()> {
        let prefix = format!("{}/", rel_dir.trim_end_matches('/'));
        self.files.retain(|rel, _| !rel.starts_with(&prefix));
        Ok(())
    }
}
