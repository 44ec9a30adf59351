//! Source CSV tables, read with polars as all-string columns.

use std::{fs::File, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, DataType}};

use crate::rows::{
    FlavorTextRow, PokemonRow, PokemonStatRow, PokemonTypeRow, SpeciesRow, StatRow,
    TypeEfficacyRow, TypeRow,
};

pub const POKEMON_CSV: &str = "pokemon.csv";
pub const SPECIES_CSV: &str = "pokemon_species.csv";
pub const TYPES_CSV: &str = "types.csv";
pub const POKEMON_TYPES_CSV: &str = "pokemon_types.csv";
pub const STATS_CSV: &str = "stats.csv";
pub const POKEMON_STATS_CSV: &str = "pokemon_stats.csv";
pub const FLAVOR_TEXT_CSV: &str = "pokemon_species_flavor_text.csv";
pub const TYPE_EFFICACY_CSV: &str = "type_efficacy.csv";

pub const ALL_TABLES: [&str; 8] = [
    POKEMON_CSV, SPECIES_CSV, TYPES_CSV, POKEMON_TYPES_CSV,
    STATS_CSV, POKEMON_STATS_CSV, FLAVOR_TEXT_CSV, TYPE_EFFICACY_CSV,
];

/// Reads a CSV file with a header row, keeping every column as text so ids
/// like `"001"` survive untouched.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv] Failed to read CSV from {:?}", path))
}

/// A loaded table plus where it came from, for error messages.
struct Table {
    path: PathBuf,
    df: DataFrame,
}

impl Table {
    fn read(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        let df = read_csv(&path)?;
        Ok(Self { path, df })
    }

    fn height(&self) -> usize { self.df.height() }

    /// Nullable cells of an optional column; `None` when the column is absent.
    fn optional(&self, name: &str) -> Result<Option<Vec<Option<String>>>> {
        let Ok(col) = self.df.column(name) else { return Ok(None) };
        let col = col.cast(&DataType::String)?;
        let cells = col.str()?
            .into_iter()
            .map(|cell| cell.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
            .collect();
        Ok(Some(cells))
    }

    /// Cells of a required column; nulls become empty strings.
    fn required(&self, name: &str) -> Result<Vec<String>> {
        let cells = self.optional(name)?
            .with_context(|| format!("[io::csv] {} has no column {name:?}", self.path.display()))?;
        Ok(cells.into_iter().map(Option::unwrap_or_default).collect())
    }
}

pub fn read_pokemon(dir: &Path) -> Result<Vec<PokemonRow>> {
    let t = Table::read(dir, POKEMON_CSV)?;
    let (id, identifier, height, weight) =
        (t.required("id")?, t.required("identifier")?, t.required("height")?, t.required("weight")?);
    let species_id = t.optional("species_id")?;
    Ok((0..t.height())
        .map(|i| PokemonRow {
            id: id[i].clone(),
            identifier: identifier[i].clone(),
            species_id: species_id.as_ref().and_then(|col| col[i].clone()),
            height: height[i].clone(),
            weight: weight[i].clone(),
        })
        .collect())
}

pub fn read_species(dir: &Path) -> Result<Vec<SpeciesRow>> {
    let t = Table::read(dir, SPECIES_CSV)?;
    let (id, identifier, chain) =
        (t.required("id")?, t.required("identifier")?, t.required("evolution_chain_id")?);
    let evolves_from = t.optional("evolves_from_species_id")?;
    Ok((0..t.height())
        .map(|i| SpeciesRow {
            id: id[i].clone(),
            identifier: identifier[i].clone(),
            evolves_from_species_id: evolves_from.as_ref().and_then(|col| col[i].clone()),
            evolution_chain_id: chain[i].clone(),
        })
        .collect())
}

pub fn read_types(dir: &Path) -> Result<Vec<TypeRow>> {
    let t = Table::read(dir, TYPES_CSV)?;
    let (id, identifier) = (t.required("id")?, t.required("identifier")?);
    Ok(id.into_iter().zip(identifier).map(|(id, identifier)| TypeRow { id, identifier }).collect())
}

pub fn read_pokemon_types(dir: &Path) -> Result<Vec<PokemonTypeRow>> {
    let t = Table::read(dir, POKEMON_TYPES_CSV)?;
    let (pokemon_id, type_id, slot) =
        (t.required("pokemon_id")?, t.required("type_id")?, t.required("slot")?);
    Ok((0..t.height())
        .map(|i| PokemonTypeRow {
            pokemon_id: pokemon_id[i].clone(),
            type_id: type_id[i].clone(),
            slot: slot[i].clone(),
        })
        .collect())
}

pub fn read_stats(dir: &Path) -> Result<Vec<StatRow>> {
    let t = Table::read(dir, STATS_CSV)?;
    let (id, identifier) = (t.required("id")?, t.required("identifier")?);
    Ok(id.into_iter().zip(identifier).map(|(id, identifier)| StatRow { id, identifier }).collect())
}

pub fn read_pokemon_stats(dir: &Path) -> Result<Vec<PokemonStatRow>> {
    let t = Table::read(dir, POKEMON_STATS_CSV)?;
    let (pokemon_id, stat_id, base_stat) =
        (t.required("pokemon_id")?, t.required("stat_id")?, t.required("base_stat")?);
    Ok((0..t.height())
        .map(|i| PokemonStatRow {
            pokemon_id: pokemon_id[i].clone(),
            stat_id: stat_id[i].clone(),
            base_stat: base_stat[i].clone(),
        })
        .collect())
}

/// Flavor text keeps its raw line breaks; cleanup happens during assembly.
pub fn read_flavor_text(dir: &Path) -> Result<Vec<FlavorTextRow>> {
    let t = Table::read(dir, FLAVOR_TEXT_CSV)?;
    let (species_id, flavor_text) = (t.required("species_id")?, t.required("flavor_text")?);
    let language_id = t.optional("language_id")?;
    Ok((0..t.height())
        .map(|i| FlavorTextRow {
            species_id: species_id[i].clone(),
            language_id: language_id.as_ref().and_then(|col| col[i].clone()),
            flavor_text: flavor_text[i].clone(),
        })
        .collect())
}

pub fn read_type_efficacy(dir: &Path) -> Result<Vec<TypeEfficacyRow>> {
    let t = Table::read(dir, TYPE_EFFICACY_CSV)?;
    let (damage, target, factor) =
        (t.required("damage_type_id")?, t.required("target_type_id")?, t.required("damage_factor")?);
    Ok((0..t.height())
        .map(|i| TypeEfficacyRow {
            damage_type_id: damage[i].clone(),
            target_type_id: target[i].clone(),
            damage_factor: factor[i].clone(),
        })
        .collect())
}
