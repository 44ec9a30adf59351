use serde::{Deserialize, Serialize};

use crate::derive::{CardSummary, ColorPalette, EvolutionChain, Weakness};

/// `{id, slug}` pair used by neighbor links and the flat index documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: u32,
    pub slug: String,
}

/// Listing/search shape of a Pokémon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlimPokemon {
    pub id: u32,
    pub slug: String,
    pub name: String,
    pub flavor_text: String,
    pub color_palette: ColorPalette,
    /// Type slugs, primary slot first.
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetails {
    #[serde(flatten)]
    pub slim: SlimPokemon,
    /// Feet.
    pub height: f64,
    /// Pounds.
    pub weight: f64,
    pub stats: Vec<StatEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_pokemon: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_pokemon: Option<EntityRef>,
    pub weaknesses: Vec<Weakness>,
    pub evolution_chain: EvolutionChain,
    pub cards: Vec<CardSummary>,
}

/// Raw type-chart percentage against (or from) another type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Efficacy {
    #[serde(rename = "type")]
    pub type_slug: String,
    pub factor: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDetails {
    pub slug: String,
    pub pokemon: Vec<SlimPokemon>,
    pub efficacy_to: Vec<Efficacy>,
    pub efficacy_from: Vec<Efficacy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub total_num_pages: usize,
    pub page_size: usize,
    pub total_num_pokemon: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonListPage {
    pub page_info: PageInfo,
    pub pokemon: Vec<SlimPokemon>,
}
