use std::borrow::Cow;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::index::{keys_match, normalize_key, parse_id};
use crate::rows::SpeciesRow;

/// One species inside an evolution level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub id: u32,
    pub slug: String,
}

/// Breadth-first evolution levels, root species first.
pub type EvolutionChain = Vec<Vec<ChainLink>>;

struct Member<'r> {
    id: u32,
    key: Cow<'r, str>,
    parent: Option<Cow<'r, str>>,
    slug: &'r str,
}

/// Unroll one evolution chain into levels.
///
/// Level 0 holds the chain's roots. Strictly those are the species with no
/// predecessor, but a species whose predecessor lies beyond `max_id` is
/// promoted to a root as well (pikachu heads its chain under a gen 1 cutoff
/// even though pichu is its parent). Level k+1 holds every species whose
/// predecessor sits in level k, so branching evolutions become siblings.
/// Each level is ordered by id. Species past `max_id` are left out.
///
/// A predecessor missing from the chain, a duplicated species, or a cycle of
/// predecessors is reported as a data-integrity error.
pub fn evolution_buckets<'r>(
    species: impl IntoIterator<Item = &'r SpeciesRow>,
    chain_id: &str,
    max_id: u32,
) -> Result<EvolutionChain> {
    let chain: Vec<&SpeciesRow> = species.into_iter()
        .filter(|s| keys_match(&s.evolution_chain_id, chain_id))
        .collect();

    let known: AHashSet<Cow<str>> = chain.iter().map(|&s| normalize_key(&s.id)).collect();

    let mut members = Vec::with_capacity(chain.len());
    for &s in &chain {
        let id = parse_id("pokemon_species", "id", &s.id)?;
        if id > max_id { continue }

        let parent = s.evolves_from_species_id.as_deref()
            .map(normalize_key)
            .filter(|p| !p.is_empty());
        if let Some(p) = &parent {
            if !known.contains(p) {
                return Err(PipelineError::missing("pokemon_species", "id", p.to_string()));
            }
        }
        members.push(Member { id, key: normalize_key(&s.id), parent, slug: &s.identifier });
    }

    let included: AHashSet<&str> = members.iter().map(|m| &*m.key).collect();
    let mut children: AHashMap<&str, Vec<&Member>> = AHashMap::new();
    let mut level: Vec<&Member> = Vec::new();
    for m in &members {
        match m.parent.as_deref().filter(|p| included.contains(p)) {
            Some(p) => children.entry(p).or_default().push(m),
            None => level.push(m),
        }
    }

    let mut visited: AHashSet<&str> = AHashSet::with_capacity(members.len());
    let mut buckets = EvolutionChain::new();
    while !level.is_empty() {
        for m in &level {
            if !visited.insert(&*m.key) {
                return Err(PipelineError::EvolutionCycle {
                    chain_id: normalize_key(chain_id).into_owned(),
                    species_id: m.key.to_string(),
                });
            }
        }
        level.sort_by_key(|m| m.id);
        buckets.push(level.iter().map(|m| ChainLink { id: m.id, slug: m.slug.to_string() }).collect());

        level = level.iter()
            .flat_map(|m| children.get(&*m.key).into_iter().flatten().copied())
            .collect();
    }

    // Anything still unvisited only reaches other unvisited species through
    // its predecessors, which means they loop.
    if let Some(m) = members.iter().find(|m| !visited.contains(&*m.key)) {
        return Err(PipelineError::EvolutionCycle {
            chain_id: normalize_key(chain_id).into_owned(),
            species_id: m.key.to_string(),
        });
    }

    Ok(buckets)
}
