use crate::rows::{
    FlavorTextRow, PokemonRow, PokemonStatRow, PokemonTypeRow, RowStore, SpeciesRow, StatRow,
    TypeEfficacyRow, TypeRow,
};

use super::LookupIndex;

/// Every join the assembler needs, built once from a `RowStore`.
#[derive(Debug, Clone)]
pub struct Indexes<'a> {
    pub pokemon_by_id: LookupIndex<'a, PokemonRow>,
    pub pokemon_by_slug: LookupIndex<'a, PokemonRow>,
    pub species_by_id: LookupIndex<'a, SpeciesRow>,
    pub species_by_chain: LookupIndex<'a, SpeciesRow>,
    pub types_by_id: LookupIndex<'a, TypeRow>,
    pub types_by_pokemon: LookupIndex<'a, PokemonTypeRow>,
    pub pokemon_by_type: LookupIndex<'a, PokemonTypeRow>,
    pub stats_by_id: LookupIndex<'a, StatRow>,
    pub stats_by_pokemon: LookupIndex<'a, PokemonStatRow>,
    pub flavor_by_species: LookupIndex<'a, FlavorTextRow>,
    pub efficacy_by_damage: LookupIndex<'a, TypeEfficacyRow>,
    pub efficacy_by_target: LookupIndex<'a, TypeEfficacyRow>,
}

impl<'a> Indexes<'a> {
    pub fn build(store: &'a RowStore) -> Self {
        Self {
            pokemon_by_id: LookupIndex::build(&store.pokemon, |r| r.id.as_str()),
            pokemon_by_slug: LookupIndex::build(&store.pokemon, |r| r.identifier.as_str()),
            species_by_id: LookupIndex::build(&store.species, |r| r.id.as_str()),
            species_by_chain: LookupIndex::build(&store.species, |r| r.evolution_chain_id.as_str()),
            types_by_id: LookupIndex::build(&store.types, |r| r.id.as_str()),
            types_by_pokemon: LookupIndex::build(&store.pokemon_types, |r| r.pokemon_id.as_str()),
            pokemon_by_type: LookupIndex::build(&store.pokemon_types, |r| r.type_id.as_str()),
            stats_by_id: LookupIndex::build(&store.stats, |r| r.id.as_str()),
            stats_by_pokemon: LookupIndex::build(&store.pokemon_stats, |r| r.pokemon_id.as_str()),
            flavor_by_species: LookupIndex::build(&store.flavor_text, |r| r.species_id.as_str()),
            efficacy_by_damage: LookupIndex::build(&store.type_efficacy, |r| r.damage_type_id.as_str()),
            efficacy_by_target: LookupIndex::build(&store.type_efficacy, |r| r.target_type_id.as_str()),
        }
    }
}
