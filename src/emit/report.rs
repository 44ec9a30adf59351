use std::fmt;

use serde::Serialize;

use crate::error::{ErrorKind, PipelineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Pokemon,
    Type,
    /// A collection document: list page, index or card corpus.
    Document,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Pokemon => f.write_str("pokemon"),
            Entity::Type => f.write_str("type"),
            Entity::Document => f.write_str("document"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityFailure {
    pub entity: Entity,
    /// Id or slug of the entity, or the output path for collection documents.
    pub name: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl EntityFailure {
    pub fn new(entity: Entity, name: impl Into<String>, err: &PipelineError) -> Self {
        Self { entity, name: name.into(), kind: err.kind(), message: err.to_string() }
    }
}

/// Outcome of a build: how many documents were written and every failure collected on the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub succeeded: usize,
    pub failures: Vec<EntityFailure>,
}

impl RunReport {
    pub fn record_success(&mut self) { self.succeeded += 1; }

    pub fn record_failure(&mut self, failure: EntityFailure) { self.failures.push(failure); }

    pub fn failed(&self) -> usize { self.failures.len() }

    pub fn is_success(&self) -> bool { self.failures.is_empty() }

    pub fn failures_of(&self, kind: ErrorKind) -> impl Iterator<Item = &EntityFailure> {
        self.failures.iter().filter(move |f| f.kind == kind)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} documents written, {} failed", self.succeeded, self.failed())?;
        for failure in &self.failures {
            write!(f, "\n  [{}] {} {}: {}", failure.kind, failure.entity, failure.name, failure.message)?;
        }
        Ok(())
    }
}
