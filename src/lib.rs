#![doc = "Pokédex data pipeline public API"]
mod assemble;
mod config;
mod derive;
mod emit;
mod error;
mod index;
mod io;
mod pipeline;
mod rows;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use assemble::{
    Assembler, Efficacy, EntityRef, PageInfo, PokemonDetails, PokemonListPage, SlimPokemon,
    StatEntry, TypeDetails,
};

#[doc(inline)]
pub use config::{Generation, PipelineConfig, DEFAULT_LANGUAGE_ID, DEFAULT_PAGE_SIZE};

#[doc(inline)]
pub use derive::{
    capitalize, clean_flavor_text, decimeters_to_feet, evolution_buckets, hectograms_to_pounds,
    humanize_stat_name, slim_cards, slugify, trim_palette, weaknesses, CardIndex, CardSummary,
    ChainLink, ColorPalette, EvolutionChain, Weakness, NO_DESCRIPTION, SWATCH_NAMES,
};

#[doc(inline)]
pub use emit::{
    paginate, paths, sha256_bytes, DiskSink, DocumentSink, Entity, EntityFailure, FileHash,
    Manifest, MemSink, RunReport,
};

#[doc(inline)]
pub use error::{ErrorKind, PipelineError};

#[doc(inline)]
pub use index::{keys_match, normalize_key, Indexes, LookupIndex};

#[doc(inline)]
pub use io::{load_row_store, read_cards, read_palettes};

#[doc(inline)]
pub use pipeline::run;

#[doc(inline)]
pub use rows::{
    FlavorTextRow, PokemonRow, PokemonStatRow, PokemonTypeRow, RawCard, RawPalette, RowStore,
    SpeciesRow, StatRow, Swatch, TypeEfficacyRow, TypeRow,
};
