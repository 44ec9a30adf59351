//! Batch driver: validate, assemble every document in parallel, flush, report.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::assemble::{Assembler, EntityRef, SlimPokemon};
use crate::config::PipelineConfig;
use crate::emit::{paginate, paths, Entity, EntityFailure, FileHash, Manifest, DocumentSink, RunReport};
use crate::error::{PipelineError, Result};
use crate::rows::RowStore;

/// One serialized document waiting to be flushed.
struct Rendered {
    entity: Entity,
    name: String,
    path: String,
    bytes: Result<Vec<u8>>,
}

impl Rendered {
    fn new<T: Serialize>(entity: Entity, name: impl Into<String>, path: String, doc: Result<T>) -> Self {
        let bytes = doc.and_then(|doc| encode(&path, &doc));
        Self { entity, name: name.into(), path, bytes }
    }
}

fn encode<T: Serialize>(path: &str, doc: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(doc).map_err(|source| PipelineError::Serialize { path: path.to_string(), source })
}

/// Writes rendered documents into a sink, hashing what lands and recording what doesn't.
struct Flush<'s> {
    sink: &'s mut dyn DocumentSink,
    report: RunReport,
    files: BTreeMap<String, FileHash>,
}

impl<'s> Flush<'s> {
    fn new(sink: &'s mut dyn DocumentSink) -> Self {
        Self { sink, report: RunReport::default(), files: BTreeMap::new() }
    }

    fn clear(&mut self, rel_dir: &str) -> Result<()> {
        self.sink.clear(rel_dir)
            .map_err(|source| PipelineError::Emission { path: rel_dir.to_string(), source })
    }

    fn write(&mut self, doc: Rendered) {
        let result = doc.bytes.and_then(|bytes| {
            self.sink.put(&doc.path, &bytes)
                .map_err(|source| PipelineError::Emission { path: doc.path.clone(), source })?;
            Ok(bytes)
        });

        match result {
            Ok(bytes) => {
                self.files.insert(doc.path, FileHash::of(&bytes));
                self.report.record_success();
            }
            Err(err) => {
                warn!(entity = %doc.entity, name = %doc.name, "{err}");
                self.report.record_failure(EntityFailure::new(doc.entity, doc.name, &err));
            }
        }
    }
}

/// Build every output document from `store` into `sink`.
///
/// Returns `Err` only when the input is broken for all entities (a dangling
/// type or stat reference, an id gap inside the cutoff) or the output
/// directories cannot be cleared. Failures confined to one entity are
/// collected into the returned report while the remaining documents are
/// still written.
pub fn run(store: &RowStore, config: &PipelineConfig, sink: &mut dyn DocumentSink) -> Result<RunReport> {
    let assembler = Assembler::new(store, config)?;
    let search_index = assembler.search_index()?;
    let all_types = assembler.all_types()?;
    info!(
        "[build] {} pokemon (max id {}), {} types, page size {}",
        assembler.num_pokemon(), config.max_pokemon_id, all_types.len(), config.page_size,
    );

    info!("[build] assembling pokemon details");
    let details: Vec<Rendered> = search_index
        .par_iter()
        .map(|EntityRef { id, slug }| {
            Rendered::new(Entity::Pokemon, slug.clone(), paths::pokemon_details(slug), assembler.pokemon_details(*id))
        })
        .collect();

    info!("[build] assembling type details");
    let types: Vec<Rendered> = assembler.types()
        .par_iter()
        .map(|ty| {
            let doc = assembler.type_details(ty);
            Rendered::new(Entity::Type, ty.identifier.clone(), paths::type_details(&ty.identifier), doc)
        })
        .collect();

    // List pages only depend on the slim shape; a failed details document
    // must not shift pagination. Slim failures are reported via details.
    let slims: Vec<SlimPokemon> = search_index
        .par_iter()
        .filter_map(|entry| assembler.slim_pokemon(entry.id).ok())
        .collect();
    if slims.len() < search_index.len() {
        warn!("[build] {} pokemon left out of the list pages", search_index.len() - slims.len());
    }
    let pages = paginate(slims, config.page_size);
    let cards = assembler.cards();

    info!("[build] writing documents");
    let mut flush = Flush::new(sink);
    flush.clear(paths::LIST_DIR)?;
    flush.clear(paths::DETAILS_DIR)?;

    let num_pages = pages.len();
    for page in pages {
        let n = page.page_info.page;
        flush.write(Rendered::new(Entity::Document, format!("page {n}"), paths::list_page(n), Ok(page)));
    }
    for doc in details.into_iter().chain(types) {
        flush.write(doc);
    }
    flush.write(Rendered::new(Entity::Document, "search index", paths::SEARCH_INDEX.into(), Ok(&search_index)));
    flush.write(Rendered::new(Entity::Document, "types index", paths::TYPES_INDEX.into(), Ok(&all_types)));
    flush.write(Rendered::new(Entity::Document, "slim cards", paths::SLIM_CARDS.into(), Ok(&cards)));

    let mut counts = store.counts();
    counts.insert("pokemon_in_cutoff", search_index.len());
    counts.insert("list_pages", num_pages);
    counts.insert("slim_cards", cards.len());
    let manifest = Manifest::new(config.clone(), counts, flush.files.clone());
    flush.write(Rendered::new(Entity::Document, "manifest", paths::MANIFEST.into(), Ok(manifest)));

    let report = flush.report;
    debug!(succeeded = report.succeeded, failed = report.failed(), "[build] done");
    Ok(report)
}
