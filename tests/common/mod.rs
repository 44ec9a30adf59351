#![allow(dead_code)]

use pokedata::{
    FlavorTextRow, PokemonRow, PokemonStatRow, PokemonTypeRow, RawCard, RawPalette, RowStore,
    SpeciesRow, StatRow, Swatch, TypeEfficacyRow, TypeRow,
};

/// (id, slug, evolution chain, evolves from, height dm, weight hg, type ids by slot)
pub const POKEMON: [(&str, &str, &str, Option<&str>, &str, &str, &[&str]); 7] = [
    ("1", "bulbasaur", "1", None, "7", "69", &["12", "4"]),
    ("2", "ivysaur", "1", Some("1"), "10", "130", &["12", "4"]),
    ("3", "venusaur", "1", Some("2"), "20", "1000", &["12", "4"]),
    ("4", "charmander", "2", None, "6", "85", &["10"]),
    ("5", "charmeleon", "2", Some("4"), "11", "190", &["10"]),
    ("6", "charizard", "2", Some("5"), "17", "905", &["10", "3"]),
    ("7", "squirtle", "3", None, "5", "90", &["11"]),
];

pub const TYPES: [(&str, &str); 7] = [
    ("1", "normal"),
    ("3", "flying"),
    ("4", "poison"),
    ("10", "fire"),
    ("11", "water"),
    ("12", "grass"),
    ("14", "psychic"),
];

pub const EFFICACY: [(&str, &str, &str); 15] = [
    ("10", "12", "200"),
    ("10", "10", "50"),
    ("10", "11", "50"),
    ("11", "10", "200"),
    ("11", "12", "50"),
    ("11", "11", "50"),
    ("12", "11", "200"),
    ("12", "12", "50"),
    ("12", "10", "50"),
    ("12", "4", "50"),
    ("12", "3", "50"),
    ("3", "12", "200"),
    ("14", "4", "200"),
    ("4", "12", "200"),
    ("4", "4", "50"),
];

pub const STATS: [(&str, &str); 3] = [("1", "hp"), ("2", "attack"), ("4", "special-attack")];

fn s(v: &str) -> String { v.to_string() }

pub fn store() -> RowStore {
    let mut store = RowStore::default();

    for &(id, slug, chain, from, height, weight, types) in &POKEMON {
        store.pokemon.push(PokemonRow {
            id: s(id),
            identifier: s(slug),
            species_id: Some(s(id)),
            height: s(height),
            weight: s(weight),
        });
        store.species.push(SpeciesRow {
            id: s(id),
            identifier: s(slug),
            evolves_from_species_id: from.map(s),
            evolution_chain_id: s(chain),
        });
        for (slot, type_id) in types.iter().enumerate() {
            store.pokemon_types.push(PokemonTypeRow {
                pokemon_id: s(id),
                type_id: s(type_id),
                slot: (slot + 1).to_string(),
            });
        }
        for (stat_id, base) in [("1", "45"), ("2", "49"), ("4", "65")] {
            store.pokemon_stats.push(PokemonStatRow {
                pokemon_id: s(id),
                stat_id: s(stat_id),
                base_stat: s(base),
            });
        }
    }

    store.types = TYPES.iter().map(|&(id, identifier)| TypeRow { id: s(id), identifier: s(identifier) }).collect();
    store.stats = STATS.iter().map(|&(id, identifier)| StatRow { id: s(id), identifier: s(identifier) }).collect();
    store.type_efficacy = EFFICACY.iter()
        .map(|&(damage, target, factor)| TypeEfficacyRow {
            damage_type_id: s(damage),
            target_type_id: s(target),
            damage_factor: s(factor),
        })
        .collect();

    store.flavor_text = vec![
        FlavorTextRow { species_id: s("1"), language_id: Some(s("5")), flavor_text: s("Au matin de sa vie.") },
        FlavorTextRow {
            species_id: s("1"),
            language_id: Some(s("9")),
            flavor_text: s("A strange seed was\nplanted on its\nback at birth."),
        },
        FlavorTextRow { species_id: s("4"), language_id: Some(s("9")), flavor_text: s("Obviously prefers\x0Chot places.") },
    ];

    store.insert_palette("1", RawPalette::from([
        (s("Vibrant"), Some(Swatch { rgb: vec![120.4, 200.6, 80.0], population: Some(512.0) })),
        (s("Muted"), None),
    ]));

    store.cards = vec![
        card("Charizard", "Pokémon", "base1"),
        card("Dark Charizard", "Pokémon", "base5"),
        card("Bulbasaur", "Pokémon", "base1"),
        card("Bill", "Trainer", "base1"),
        card("Charmander", "Pokemon", "base1"),
    ];

    store
}

pub fn card(name: &str, supertype: &str, set_code: &str) -> RawCard {
    RawCard {
        name: s(name),
        image_url: Some(format!("https://images.example/{set_code}/{}.png", name.to_lowercase().replace(' ', "-"))),
        image_url_hi_res: None,
        set_code: Some(s(set_code)),
        supertype: Some(s(supertype)),
    }
}
