use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::PipelineConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHash {
    pub sha256: String,
}

impl FileHash {
    pub fn of(bytes: &[u8]) -> Self { Self { sha256: sha256_bytes(bytes) } }
}

pub fn sha256_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Description of one build: the config it ran with, how many rows and
/// documents it saw, and a digest of every file it wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    version: String,
    pub config: PipelineConfig,
    pub counts: BTreeMap<String, usize>,
    pub files: BTreeMap<String, FileHash>,
}

impl Manifest {
    pub fn new(
        config: PipelineConfig,
        counts: BTreeMap<&'static str, usize>,
        files: BTreeMap<String, FileHash>,
    ) -> Self {
        Self {
            version: "1".into(),
            config,
            counts: counts.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            files,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("Failed to parse manifest.json")
    }
}
