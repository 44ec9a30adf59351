use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Coarse classification used in run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The source dataset is broken (dangling key, cycle, malformed number).
    DataIntegrity,
    /// A document could not be serialized or written to the sink.
    Emission,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::DataIntegrity => f.write_str("data-integrity"),
            ErrorKind::Emission => f.write_str("emission"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{table} has no row with {key} = {value:?}")]
    MissingReference {
        table: &'static str,
        key: &'static str,
        value: String,
    },

    #[error("{table}.{field} has invalid value {value:?}")]
    InvalidField {
        table: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("pokemon id {missing_id} is inside the cutoff but missing from the pokemon table")]
    IncompleteCutoff { missing_id: u32 },

    #[error("evolution chain {chain_id} revisits species {species_id}")]
    EvolutionCycle { chain_id: String, species_id: String },

    #[error("could not serialize {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {path}: {source:#}")]
    Emission {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Serialize { .. } | PipelineError::Emission { .. } => ErrorKind::Emission,
            _ => ErrorKind::DataIntegrity,
        }
    }

    pub(crate) fn missing(table: &'static str, key: &'static str, value: impl Into<String>) -> Self {
        PipelineError::MissingReference { table, key, value: value.into() }
    }

    pub(crate) fn invalid(table: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        PipelineError::InvalidField { table, field, value: value.into() }
    }
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
