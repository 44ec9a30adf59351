//! File-level collaborators: source CSV tables, palette and card JSON, output directories.

mod csv;
mod fs;
mod json;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::rows::RowStore;

pub use csv::{read_csv, ALL_TABLES};
pub use fs::{check_output_dir, ensure_dir_exists, require_dir_exists};
pub use json::{read_cards, read_palettes, write_to_json_file};

/// Load every source table from `data_dir`, plus the optional palette file and card directory.
pub fn load_row_store(data_dir: &Path, palettes: Option<&Path>, cards_dir: Option<&Path>) -> Result<RowStore> {
    require_dir_exists(data_dir)?;
    info!("[io] loading tables from {}", data_dir.display());

    let mut store = RowStore {
        pokemon: csv::read_pokemon(data_dir)?,
        species: csv::read_species(data_dir)?,
        types: csv::read_types(data_dir)?,
        pokemon_types: csv::read_pokemon_types(data_dir)?,
        stats: csv::read_stats(data_dir)?,
        pokemon_stats: csv::read_pokemon_stats(data_dir)?,
        flavor_text: csv::read_flavor_text(data_dir)?,
        type_efficacy: csv::read_type_efficacy(data_dir)?,
        ..RowStore::default()
    };

    if let Some(path) = palettes {
        info!("[io] loading palettes from {}", path.display());
        for (id, palette) in read_palettes(path)? {
            store.insert_palette(&id, palette);
        }
    }

    if let Some(dir) = cards_dir {
        info!("[io] loading cards from {}", dir.display());
        require_dir_exists(dir).context("Card directory is unusable")?;
        store.cards = read_cards(dir)?;
    }

    Ok(store)
}
