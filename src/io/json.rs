use std::{collections::BTreeMap, fs::{self, File}, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::{json::JsonFormat, SerWriter}, prelude::JsonWriter};
use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::rows::{RawCard, RawPalette};

/// Writes a Polars DataFrame to a JSON array file at `path`.
pub fn write_to_json_file(path: &Path, df: &DataFrame) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let writer: BufWriter<File> = BufWriter::new(file);
    JsonWriter::new(writer)
        .with_json_format(JsonFormat::Json)
        .finish(&mut df.clone())?;
    Ok(())
}

/// Palette dumps come either keyed by pokemon id or as an array indexed by id.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Keyed(BTreeMap<String, Option<RawPalette>>),
    Indexed(Vec<Option<RawPalette>>),
}

/// Reads a palette dump into `(pokemon id, palette)` pairs. Null entries are skipped.
pub fn read_palettes(path: &Path) -> Result<Vec<(String, RawPalette)>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read palette file: {}", path.display()))?;
    let file: PaletteFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse palette file: {}", path.display()))?;

    let palettes: Vec<_> = match file {
        PaletteFile::Keyed(map) => map.into_iter()
            .filter_map(|(id, palette)| Some((id, palette?)))
            .collect(),
        PaletteFile::Indexed(list) => list.into_iter()
            .enumerate()
            .filter_map(|(id, palette)| Some((id.to_string(), palette?)))
            .collect(),
    };
    debug!("[io::json] {} palettes from {}", palettes.len(), path.display());
    Ok(palettes)
}

/// Reads every `*.json` card file below `dir`, in sorted path order.
/// Each file holds an array of card records.
pub fn read_cards(dir: &Path) -> Result<Vec<RawCard>> {
    let mut cards = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read card file: {}", path.display()))?;
        let batch: Vec<RawCard> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse card file: {}", path.display()))?;
        debug!("[io::json] {} cards from {}", batch.len(), path.display());
        cards.extend(batch);
    }
    Ok(cards)
}
