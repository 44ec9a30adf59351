use std::collections::BTreeMap;

use serde::Deserialize;

// Raw rows mirror the source CSV columns. Numeric fields stay as text; joins go
// through `index::normalize_key`, parsing happens in the assembler.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonRow {
    pub id: String,
    pub identifier: String,
    /// Absent in trimmed dumps; the pokemon id doubles as the species id then.
    pub species_id: Option<String>,
    /// Decimeters.
    pub height: String,
    /// Hectograms.
    pub weight: String,
}

impl PokemonRow {
    pub fn species_key(&self) -> &str {
        self.species_id.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesRow {
    pub id: String,
    pub identifier: String,
    pub evolves_from_species_id: Option<String>,
    pub evolution_chain_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRow {
    pub id: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonTypeRow {
    pub pokemon_id: String,
    pub type_id: String,
    pub slot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatRow {
    pub id: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonStatRow {
    pub pokemon_id: String,
    pub stat_id: String,
    pub base_stat: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlavorTextRow {
    pub species_id: String,
    pub language_id: Option<String>,
    pub flavor_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeEfficacyRow {
    pub damage_type_id: String,
    pub target_type_id: String,
    /// Integer percentage: 0, 50, 100 or 200.
    pub damage_factor: String,
}

/// One extracted color of a sprite palette.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Swatch {
    #[serde(default)]
    pub rgb: Vec<f64>,
    #[serde(default)]
    pub population: Option<f64>,
}

/// Named swatches (`Vibrant`, `LightMuted`, ...) for one Pokémon; a swatch may be null.
pub type RawPalette = BTreeMap<String, Option<Swatch>>;

/// A trading-card record as it appears in the TCG dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_url_hi_res: Option<String>,
    #[serde(default)]
    pub set_code: Option<String>,
    #[serde(default)]
    pub supertype: Option<String>,
}
