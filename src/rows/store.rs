use std::collections::BTreeMap;

use crate::index::normalize_key;
use crate::rows::{
    FlavorTextRow, PokemonRow, PokemonStatRow, PokemonTypeRow, RawCard, RawPalette, SpeciesRow,
    StatRow, TypeEfficacyRow, TypeRow,
};

/// Immutable snapshot of every source table, built once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    pub pokemon: Vec<PokemonRow>,
    pub species: Vec<SpeciesRow>,
    pub types: Vec<TypeRow>,
    pub pokemon_types: Vec<PokemonTypeRow>,
    pub stats: Vec<StatRow>,
    pub pokemon_stats: Vec<PokemonStatRow>,
    pub flavor_text: Vec<FlavorTextRow>,
    pub type_efficacy: Vec<TypeEfficacyRow>,
    /// Keyed by normalized pokemon id.
    pub palettes: BTreeMap<String, RawPalette>,
    pub cards: Vec<RawCard>,
}

impl RowStore {
    /// Insert a palette, normalizing its key so `"25"`, `"25.0"` and `25` collide.
    pub fn insert_palette(&mut self, pokemon_id: &str, palette: RawPalette) {
        self.palettes.insert(normalize_key(pokemon_id).into_owned(), palette);
    }

    pub fn palette(&self, pokemon_id: &str) -> Option<&RawPalette> {
        self.palettes.get(normalize_key(pokemon_id).as_ref())
    }

    /// Row counts per table, in a stable order, for logging and manifests.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("pokemon", self.pokemon.len()),
            ("pokemon_species", self.species.len()),
            ("types", self.types.len()),
            ("pokemon_types", self.pokemon_types.len()),
            ("stats", self.stats.len()),
            ("pokemon_stats", self.pokemon_stats.len()),
            ("pokemon_species_flavor_text", self.flavor_text.len()),
            ("type_efficacy", self.type_efficacy.len()),
            ("palettes", self.palettes.len()),
            ("cards", self.cards.len()),
        ])
    }
}
