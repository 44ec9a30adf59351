use tracing::debug;

use crate::config::PipelineConfig;
use crate::derive::{
    capitalize, clean_flavor_text, decimeters_to_feet, evolution_buckets, hectograms_to_pounds,
    humanize_stat_name, slim_cards, trim_palette, weaknesses, CardIndex, CardSummary,
};
use crate::error::{PipelineError, Result};
use crate::index::{keys_match, parse_id, parse_int, Indexes};
use crate::rows::{PokemonRow, RowStore, TypeEfficacyRow, TypeRow};

use super::{Efficacy, EntityRef, PokemonDetails, SlimPokemon, StatEntry, TypeDetails};

/// Joins the row store into page documents.
///
/// Construction checks everything every document depends on (the id range
/// and the type and stat tables); a failure there is fatal for the run.
/// Per-document methods only fail for problems local to that entity.
pub struct Assembler<'a> {
    store: &'a RowStore,
    index: Indexes<'a>,
    config: &'a PipelineConfig,
    cards: CardIndex,
    num_pokemon: u32,
}

impl<'a> Assembler<'a> {
    pub fn new(store: &'a RowStore, config: &'a PipelineConfig) -> Result<Self> {
        let index = Indexes::build(store);

        let mut num_pokemon = 0;
        for row in &store.pokemon {
            if config.includes(parse_id("pokemon", "id", &row.id)?) {
                num_pokemon += 1;
            }
        }

        let assembler = Self {
            store,
            index,
            config,
            cards: CardIndex::new(
                slim_cards(&store.cards),
                store.pokemon.iter().map(|row| row.identifier.as_str()),
            ),
            num_pokemon,
        };
        assembler.validate()?;
        Ok(assembler)
    }

    fn validate(&self) -> Result<()> {
        for id in self.pokemon_ids() {
            if !self.index.pokemon_by_id.contains(id) {
                return Err(PipelineError::IncompleteCutoff { missing_id: id });
            }
        }

        for ty in &self.store.types {
            parse_id("types", "id", &ty.id)?;
        }

        for assoc in &self.store.pokemon_types {
            if self.in_range(&assoc.pokemon_id)? {
                self.type_row(&assoc.type_id)?;
            }
        }

        for assoc in &self.store.pokemon_stats {
            if self.in_range(&assoc.pokemon_id)? && self.index.stats_by_id.find(&assoc.stat_id).is_none() {
                return Err(PipelineError::missing("stats", "id", assoc.stat_id.as_str()));
            }
        }

        for row in &self.store.type_efficacy {
            self.type_row(&row.damage_type_id)?;
            self.type_row(&row.target_type_id)?;
        }

        Ok(())
    }

    /// Number of Pokémon inside the cutoff; ids run `1..=num_pokemon` without gaps.
    pub fn num_pokemon(&self) -> u32 { self.num_pokemon }

    pub fn pokemon_ids(&self) -> std::ops::RangeInclusive<u32> { 1..=self.num_pokemon }

    pub fn types(&self) -> &'a [TypeRow] { &self.store.types }

    /// The filtered and projected card corpus, sorted for lookup.
    pub fn cards(&self) -> Vec<CardSummary> { slim_cards(&self.store.cards) }

    fn in_range(&self, pokemon_id: &str) -> Result<bool> {
        let id = parse_id("pokemon", "id", pokemon_id)?;
        Ok((1..=self.num_pokemon).contains(&id))
    }

    fn pokemon_row(&self, id: u32) -> Result<&'a PokemonRow> {
        self.index.pokemon_by_id.find(id)
            .ok_or_else(|| PipelineError::missing("pokemon", "id", id.to_string()))
    }

    fn type_row(&self, type_id: &str) -> Result<&'a TypeRow> {
        self.index.types_by_id.find(type_id)
            .ok_or_else(|| PipelineError::missing("types", "id", type_id))
    }

    /// Type rows of a Pokémon ordered by slot.
    fn pokemon_types(&self, pokemon_id: &str) -> Result<Vec<&'a TypeRow>> {
        let mut assocs = Vec::new();
        for assoc in self.index.types_by_pokemon.find_all(pokemon_id) {
            let slot = parse_id("pokemon_types", "slot", &assoc.slot)?;
            assocs.push((slot, assoc));
        }
        assocs.sort_by_key(|(slot, _)| *slot);

        assocs.into_iter()
            .map(|(_, assoc)| self.type_row(&assoc.type_id))
            .collect()
    }

    fn flavor_text(&self, pokemon: &PokemonRow) -> String {
        let language = self.config.language_id.map(|id| id.to_string());
        let text = self.index.flavor_by_species.find_all(pokemon.species_key())
            .into_iter()
            .find(|row| match (&language, &row.language_id) {
                (Some(wanted), Some(actual)) => keys_match(wanted, actual),
                _ => true,
            })
            .map(|row| row.flavor_text.as_str());

        if text.is_none() {
            debug!(pokemon = %pokemon.identifier, "no flavor text, using fallback");
        }
        clean_flavor_text(text)
    }

    fn entity_ref(&self, id: u32) -> Result<EntityRef> {
        let row = self.pokemon_row(id)?;
        Ok(EntityRef { id, slug: row.identifier.clone() })
    }

    pub fn slim_pokemon(&self, id: u32) -> Result<SlimPokemon> {
        let row = self.pokemon_row(id)?;

        let palette = self.store.palette(&row.id);
        if palette.is_none() {
            debug!(pokemon = %row.identifier, "no color palette");
        }

        Ok(SlimPokemon {
            id,
            slug: row.identifier.clone(),
            name: capitalize(&row.identifier),
            flavor_text: self.flavor_text(row),
            color_palette: trim_palette(palette),
            types: self.pokemon_types(&row.id)?
                .into_iter()
                .map(|ty| ty.identifier.clone())
                .collect(),
        })
    }

    pub fn pokemon_details(&self, id: u32) -> Result<PokemonDetails> {
        let row = self.pokemon_row(id)?;
        let slim = self.slim_pokemon(id)?;

        let mut stats = Vec::new();
        for assoc in self.index.stats_by_pokemon.find_all(&row.id) {
            let stat = self.index.stats_by_id.find(&assoc.stat_id)
                .ok_or_else(|| PipelineError::missing("stats", "id", assoc.stat_id.as_str()))?;
            stats.push(StatEntry {
                name: humanize_stat_name(&stat.identifier),
                base: parse_id("pokemon_stats", "base_stat", &assoc.base_stat)?,
            });
        }

        let type_ids: Vec<&str> = self.pokemon_types(&row.id)?
            .into_iter()
            .map(|ty| ty.id.as_str())
            .collect();

        let species = self.index.species_by_id.find(row.species_key())
            .ok_or_else(|| PipelineError::missing("pokemon_species", "id", row.species_key()))?;
        let mut evolution_chain = evolution_buckets(
            self.index.species_by_chain.find_all(&species.evolution_chain_id),
            &species.evolution_chain_id,
            self.config.max_pokemon_id,
        )?;
        if evolution_chain.len() < 2 {
            debug!(pokemon = %row.identifier, "does not evolve");
            evolution_chain.clear();
        }

        Ok(PokemonDetails {
            height: decimeters_to_feet(parse_int("pokemon", "height", &row.height)? as f64),
            weight: hectograms_to_pounds(parse_int("pokemon", "weight", &row.weight)? as f64),
            stats,
            previous_pokemon: if id > 1 { Some(self.entity_ref(id - 1)?) } else { None },
            next_pokemon: if id < self.num_pokemon { Some(self.entity_ref(id + 1)?) } else { None },
            weaknesses: weaknesses(&self.store.types, &type_ids, &self.index.efficacy_by_damage)?,
            evolution_chain,
            cards: self.cards.cards_for(&row.identifier),
            slim,
        })
    }

    pub fn pokemon_details_by_slug(&self, slug: &str) -> Result<PokemonDetails> {
        let row = self.index.pokemon_by_slug.find(slug)
            .ok_or_else(|| PipelineError::missing("pokemon", "identifier", slug))?;
        let id = parse_id("pokemon", "id", &row.id)?;
        if !(1..=self.num_pokemon).contains(&id) {
            return Err(PipelineError::missing("pokemon", "identifier", slug));
        }
        self.pokemon_details(id)
    }

    pub fn type_details(&self, ty: &TypeRow) -> Result<TypeDetails> {
        let mut ids = Vec::new();
        for assoc in self.index.pokemon_by_type.find_all(&ty.id) {
            let id = parse_id("pokemon_types", "pokemon_id", &assoc.pokemon_id)?;
            if (1..=self.num_pokemon).contains(&id) {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        ids.dedup();

        Ok(TypeDetails {
            slug: ty.identifier.clone(),
            pokemon: ids.into_iter().map(|id| self.slim_pokemon(id)).collect::<Result<_>>()?,
            efficacy_to: self.efficacies(self.index.efficacy_by_damage.find_all(&ty.id), |r| &r.target_type_id)?,
            efficacy_from: self.efficacies(self.index.efficacy_by_target.find_all(&ty.id), |r| &r.damage_type_id)?,
        })
    }

    /// Resolve the opposite side of each efficacy row, ordered by that type's id.
    fn efficacies(
        &self,
        rows: Vec<&TypeEfficacyRow>,
        other: impl Fn(&TypeEfficacyRow) -> &String,
    ) -> Result<Vec<Efficacy>> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let other_ty = self.type_row(other(row))?;
            out.push((
                parse_id("types", "id", &other_ty.id)?,
                Efficacy {
                    type_slug: other_ty.identifier.clone(),
                    factor: parse_int("type_efficacy", "damage_factor", &row.damage_factor)?,
                },
            ));
        }
        out.sort_by_key(|(id, _)| *id);
        Ok(out.into_iter().map(|(_, e)| e).collect())
    }

    /// `{id, slug}` for every type, in table order.
    pub fn all_types(&self) -> Result<Vec<EntityRef>> {
        self.store.types.iter()
            .map(|ty| Ok(EntityRef { id: parse_id("types", "id", &ty.id)?, slug: ty.identifier.clone() }))
            .collect()
    }

    /// `{id, slug}` for every Pokémon inside the cutoff, ascending id.
    pub fn search_index(&self) -> Result<Vec<EntityRef>> {
        self.pokemon_ids().map(|id| self.entity_ref(id)).collect()
    }
}
