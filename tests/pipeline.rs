mod common;

use anyhow::{anyhow, Result};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use pokedata::{
    paths, Assembler, DocumentSink, Entity, ErrorKind, Manifest, MemSink, PipelineConfig, PipelineError,
    PokemonRow, RunReport, SpeciesRow,
};

fn build(store: &pokedata::RowStore, config: &PipelineConfig) -> (RunReport, MemSink) {
    let mut sink = MemSink::new();
    let report = pokedata::run(store, config, &mut sink).unwrap();
    (report, sink)
}

fn details(sink: &MemSink, slug: &str) -> Value {
    sink.json(&paths::pokemon_details(slug)).unwrap()
}

#[test]
fn writes_every_document() {
    let (report, sink) = build(&common::store(), &PipelineConfig::new(7, 3));

    assert!(report.is_success(), "{report}");
    // 3 list pages, 7 details, 7 types, 3 indexes, 1 manifest
    assert_eq!(report.succeeded, 21);

    let expected = [
        "cards/slim_cards.json",
        "manifest.json",
        "pokemon/details/bulbasaur.json",
        "pokemon/details/charizard.json",
        "pokemon/details/charmander.json",
        "pokemon/details/charmeleon.json",
        "pokemon/details/ivysaur.json",
        "pokemon/details/squirtle.json",
        "pokemon/details/venusaur.json",
        "pokemon/list/1.json",
        "pokemon/list/2.json",
        "pokemon/list/3.json",
        "search/index.json",
        "types/fire.json",
        "types/flying.json",
        "types/grass.json",
        "types/index.json",
        "types/normal.json",
        "types/poison.json",
        "types/psychic.json",
        "types/water.json",
    ];
    assert_eq!(sink.files.keys().map(String::as_str).collect::<Vec<_>>(), expected);
}

#[test]
fn list_pages_partition_by_id() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 3));

    let last = sink.json(&paths::list_page(3)).unwrap();
    assert_eq!(last["pageInfo"], json!({ "page": 3, "totalNumPages": 3, "pageSize": 3, "totalNumPokemon": 7 }));
    assert_eq!(last["pokemon"].as_array().unwrap().len(), 1);
    assert_eq!(last["pokemon"][0]["slug"], "squirtle");

    let first = sink.json(&paths::list_page(1)).unwrap();
    let ids: Vec<_> = first["pokemon"].as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, [json!(1), json!(2), json!(3)]);
}

#[test]
fn bulbasaur_details() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 50));
    let doc = details(&sink, "bulbasaur");

    assert_eq!(doc["id"], 1);
    assert_eq!(doc["name"], "Bulbasaur");
    assert_eq!(doc["types"], json!(["grass", "poison"]));
    assert_eq!(doc["flavorText"], "A strange seed was planted on its back at birth.");
    assert_eq!(doc["height"], 2.3);
    assert_eq!(doc["weight"], 15.21);
    assert_eq!(doc["colorPalette"]["Vibrant"], json!([120, 201, 80]));
    assert_eq!(doc["colorPalette"]["Muted"], Value::Null);
    assert_eq!(doc["colorPalette"]["DarkVibrant"], Value::Null);
    assert_eq!(
        doc["stats"],
        json!([
            { "name": "HP", "base": 45 },
            { "name": "Attack", "base": 49 },
            { "name": "Sp. Attack", "base": 65 },
        ]),
    );
    assert!(doc.get("previousPokemon").is_none());
    assert_eq!(doc["nextPokemon"], json!({ "id": 2, "slug": "ivysaur" }));
    assert_eq!(
        doc["weaknesses"],
        json!([
            { "slug": "flying", "factor": 2.0 },
            { "slug": "fire", "factor": 2.0 },
            { "slug": "psychic", "factor": 2.0 },
        ]),
    );
    assert_eq!(
        doc["evolutionChain"],
        json!([
            [{ "id": 1, "slug": "bulbasaur" }],
            [{ "id": 2, "slug": "ivysaur" }],
            [{ "id": 3, "slug": "venusaur" }],
        ]),
    );
    assert_eq!(doc["cards"].as_array().unwrap().len(), 1);
    assert_eq!(doc["cards"][0]["name"], "Bulbasaur");
}

#[test]
fn last_pokemon_has_no_next_and_no_chain() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 50));
    let doc = details(&sink, "squirtle");

    assert!(doc.get("nextPokemon").is_none());
    assert_eq!(doc["previousPokemon"], json!({ "id": 6, "slug": "charizard" }));
    assert_eq!(doc["evolutionChain"], json!([]));
    assert_eq!(doc["flavorText"], "No description.");
    assert_eq!(doc["cards"], json!([]));
}

#[test]
fn charizard_gets_cards_and_weaknesses() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 50));
    let doc = details(&sink, "charizard");

    assert_eq!(doc["height"], 5.58);
    assert_eq!(doc["weight"], 199.51);
    assert_eq!(doc["weaknesses"], json!([{ "slug": "water", "factor": 2.0 }]));
    let names: Vec<_> = doc["cards"].as_array().unwrap().iter().map(|c| c["name"].clone()).collect();
    assert_eq!(names, [json!("Charizard"), json!("Dark Charizard")]);
}

#[test]
fn every_pokemon_has_one_or_two_types() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 50));
    for entry in sink.json(paths::SEARCH_INDEX).unwrap().as_array().unwrap() {
        let doc = details(&sink, entry["slug"].as_str().unwrap());
        assert_eq!(doc["id"], entry["id"]);
        let n = doc["types"].as_array().unwrap().len();
        assert!((1..=2).contains(&n), "{} has {n} types", entry["slug"]);
    }
}

#[test]
fn cutoff_excludes_later_pokemon_everywhere() {
    let (report, sink) = build(&common::store(), &PipelineConfig::new(5, 50));
    assert!(report.is_success(), "{report}");

    assert!(sink.get(&paths::pokemon_details("charizard")).is_err());
    assert_eq!(
        sink.json(paths::SEARCH_INDEX).unwrap().as_array().unwrap().len(),
        5,
    );

    let charmander = details(&sink, "charmander");
    assert_eq!(
        charmander["evolutionChain"],
        json!([[{ "id": 4, "slug": "charmander" }], [{ "id": 5, "slug": "charmeleon" }]]),
    );
    let charmeleon = details(&sink, "charmeleon");
    assert!(charmeleon.get("nextPokemon").is_none());

    let fire = sink.json(&paths::type_details("fire")).unwrap();
    let ids: Vec<_> = fire["pokemon"].as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, [json!(4), json!(5)]);
    let flying = sink.json(&paths::type_details("flying")).unwrap();
    assert_eq!(flying["pokemon"], json!([]));
}

#[test]
fn type_details_list_efficacy_by_type_id() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 50));
    let grass = sink.json(&paths::type_details("grass")).unwrap();

    assert_eq!(grass["slug"], "grass");
    assert_eq!(
        grass["efficacyTo"],
        json!([
            { "type": "flying", "factor": 50 },
            { "type": "poison", "factor": 50 },
            { "type": "fire", "factor": 50 },
            { "type": "water", "factor": 200 },
            { "type": "grass", "factor": 50 },
        ]),
    );
    assert_eq!(
        grass["efficacyFrom"],
        json!([
            { "type": "flying", "factor": 200 },
            { "type": "poison", "factor": 200 },
            { "type": "fire", "factor": 200 },
            { "type": "water", "factor": 50 },
            { "type": "grass", "factor": 50 },
        ]),
    );

    let types_index = sink.json(paths::TYPES_INDEX).unwrap();
    assert_eq!(types_index[0], json!({ "id": 1, "slug": "normal" }));
    assert_eq!(types_index.as_array().unwrap().len(), 7);
}

#[test]
fn slim_cards_drop_trainers() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 50));
    let cards = sink.json(paths::SLIM_CARDS).unwrap();
    let names: Vec<_> = cards.as_array().unwrap().iter().map(|c| c["name"].clone()).collect();
    assert_eq!(names, [json!("Charizard"), json!("Dark Charizard"), json!("Bulbasaur"), json!("Charmander")]);
    assert!(cards[0].get("supertype").is_none());
}

#[test]
fn rerun_is_byte_identical() {
    let store = common::store();
    let config = PipelineConfig::new(7, 3);
    let (_, first) = build(&store, &config);
    let (_, second) = build(&store, &config);
    assert_eq!(first, second);
}

#[test]
fn manifest_hashes_every_document() {
    let (_, sink) = build(&common::store(), &PipelineConfig::new(7, 3));
    let manifest = Manifest::from_slice(sink.get(paths::MANIFEST).unwrap()).unwrap();

    assert_eq!(manifest.config, PipelineConfig::new(7, 3));
    assert_eq!(manifest.counts["pokemon_in_cutoff"], 7);
    assert_eq!(manifest.counts["list_pages"], 3);
    assert_eq!(manifest.files.len(), sink.files.len() - 1);
    for (path, hash) in &manifest.files {
        assert_eq!(hash.sha256, pokedata::sha256_bytes(sink.get(path).unwrap()), "{path}");
    }
}

#[test]
fn broken_chain_fails_only_that_pokemon() {
    let mut store = common::store();
    let squirtle = store.species.iter_mut().find(|s| s.id == "7").unwrap();
    squirtle.evolves_from_species_id = Some("99".into());

    let (report, sink) = build(&store, &PipelineConfig::new(7, 50));

    assert_eq!(report.failed(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.entity, Entity::Pokemon);
    assert_eq!(failure.name, "squirtle");
    assert_eq!(failure.kind, ErrorKind::DataIntegrity);

    assert!(sink.get(&paths::pokemon_details("squirtle")).is_err());
    assert!(sink.get(&paths::pokemon_details("charizard")).is_ok());
    let water = sink.json(&paths::type_details("water")).unwrap();
    assert_eq!(water["pokemon"][0]["slug"], "squirtle");
}

#[test]
fn failed_details_keep_listing_and_links_consistent() {
    let mut store = common::store();
    store.pokemon.iter_mut().find(|p| p.identifier == "ivysaur").unwrap().height = "tall".into();

    let (report, sink) = build(&store, &PipelineConfig::new(7, 3));

    let names: Vec<_> = report.failures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["ivysaur"]);
    assert_eq!(report.failures[0].kind, ErrorKind::DataIntegrity);
    assert!(sink.get(&paths::pokemon_details("ivysaur")).is_err());

    let first = sink.json(&paths::list_page(1)).unwrap();
    let ids: Vec<_> = first["pokemon"].as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, [json!(1), json!(2), json!(3)]);
    assert_eq!(first["pageInfo"]["totalNumPokemon"], 7);
    assert_eq!(first["pageInfo"]["totalNumPages"], 3);

    let search = sink.json(paths::SEARCH_INDEX).unwrap();
    assert_eq!(search.as_array().unwrap().len(), 7);
    assert_eq!(search[1], json!({ "id": 2, "slug": "ivysaur" }));

    assert_eq!(details(&sink, "bulbasaur")["nextPokemon"], search[1]);
    assert_eq!(details(&sink, "venusaur")["previousPokemon"], search[1]);

    let grass = sink.json(&paths::type_details("grass")).unwrap();
    let grass_ids: Vec<_> = grass["pokemon"].as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(grass_ids, [json!(1), json!(2), json!(3)]);
}

#[test]
fn details_resolve_by_slug_inside_the_cutoff() {
    let store = common::store();
    let config = PipelineConfig::new(5, 50);
    let assembler = Assembler::new(&store, &config).unwrap();

    let charmeleon = assembler.pokemon_details_by_slug("charmeleon").unwrap();
    assert_eq!(charmeleon.slim.id, 5);
    assert_eq!(charmeleon.next_pokemon, None);

    assert!(matches!(
        assembler.pokemon_details_by_slug("charizard"),
        Err(PipelineError::MissingReference { table: "pokemon", .. }),
    ));
    assert!(assembler.pokemon_details_by_slug("missingno").is_err());
}

#[test]
fn evolution_cycle_is_reported() {
    let mut store = common::store();
    store.species.iter_mut().find(|s| s.id == "1").unwrap().evolves_from_species_id = Some("3".into());

    let (report, _) = build(&store, &PipelineConfig::new(7, 50));

    let names: Vec<_> = report.failures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "ivysaur", "venusaur"]);
    assert!(report.failures[0].message.contains("evolution chain 1"));
}

#[test]
fn missing_species_is_a_per_entity_failure() {
    let mut store = common::store();
    store.species.retain(|s| s.id != "5");
    // charmeleon's child now points at a species that is gone
    let (report, _) = build(&store, &PipelineConfig::new(7, 50));

    let names: Vec<_> = report.failures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["charmander", "charmeleon", "charizard"]);
}

#[test]
fn unknown_type_aborts_the_run() {
    let mut store = common::store();
    store.pokemon_types[0].type_id = "99".into();

    let mut sink = MemSink::new();
    let err = pokedata::run(&store, &PipelineConfig::new(7, 50), &mut sink).unwrap_err();

    assert!(matches!(err, PipelineError::MissingReference { table: "types", .. }), "{err}");
    assert_eq!(err.kind(), ErrorKind::DataIntegrity);
    assert!(sink.files.is_empty());
}

#[test]
fn gap_inside_cutoff_aborts_the_run() {
    let mut store = common::store();
    store.pokemon.retain(|p| p.id != "3");
    store.pokemon.push(PokemonRow { id: "8".into(), identifier: "wartortle".into(), ..PokemonRow::default() });
    store.species.push(SpeciesRow {
        id: "8".into(),
        identifier: "wartortle".into(),
        evolves_from_species_id: Some("7".into()),
        evolution_chain_id: "3".into(),
    });

    let mut sink = MemSink::new();
    let err = pokedata::run(&store, &PipelineConfig::new(7, 50), &mut sink).unwrap_err();
    assert!(matches!(err, PipelineError::IncompleteCutoff { missing_id: 3 }), "{err}");
}

/// Sink that rejects everything below one directory.
struct FailingSink {
    inner: MemSink,
    reject: &'static str,
}

impl DocumentSink for FailingSink {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        if rel.starts_with(self.reject) {
            return Err(anyhow!("permission denied"));
        }
        self.inner.put(rel, bytes)
    }

    fn clear(&mut self, rel_dir: &str) -> Result<()> { self.inner.clear(rel_dir) }
}

#[test]
fn write_failures_are_collected() {
    let mut sink = FailingSink { inner: MemSink::new(), reject: "types/" };
    let report = pokedata::run(&common::store(), &PipelineConfig::new(7, 50), &mut sink).unwrap();

    // every type page plus the types index
    assert_eq!(report.failures_of(ErrorKind::Emission).count(), 8);
    assert!(report.failures.iter().any(|f| f.message.contains("permission denied")));
    assert!(sink.inner.get(&paths::pokemon_details("bulbasaur")).is_ok());

    let manifest = Manifest::from_slice(sink.inner.get(paths::MANIFEST).unwrap()).unwrap();
    assert!(!manifest.files.contains_key(paths::TYPES_INDEX));
}

#[test]
fn stale_list_and_detail_documents_are_cleared() {
    let mut sink = MemSink::new();
    sink.put("pokemon/list/99.json", b"{}").unwrap();
    sink.put("pokemon/details/missingno.json", b"{}").unwrap();
    sink.put("extra/keep.json", b"{}").unwrap();

    pokedata::run(&common::store(), &PipelineConfig::new(7, 50), &mut sink).unwrap();

    assert!(sink.get("pokemon/list/99.json").is_err());
    assert!(sink.get("pokemon/details/missingno.json").is_err());
    assert!(sink.get("extra/keep.json").is_ok());
}
