//! Document emission: output sinks, pagination, manifest and run report.

mod manifest;
mod paginate;
pub mod paths;
mod report;
mod sink;

pub use manifest::{sha256_bytes, FileHash, Manifest};
pub use paginate::paginate;
pub use report::{Entity, EntityFailure, RunReport};
pub use sink::{DiskSink, DocumentSink, MemSink};
