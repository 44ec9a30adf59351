use serde::{Deserialize, Serialize};

use crate::rows::RawCard;

use super::slugify;

/// Trading card projected down to what detail pages render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub name: String,
    pub image_url: Option<String>,
    pub image_url_hi_res: Option<String>,
    pub set_code: Option<String>,
}

/// Trainer and energy cards are excluded; the supertype is compared without
/// case or accent so `Pokémon` and `POKEMON` both qualify.
fn is_pokemon_card(card: &RawCard) -> bool {
    card.supertype.as_deref()
        .map(|s| slugify(s) == "pokemon")
        .unwrap_or(false)
}

/// Filter a raw corpus to Pokémon cards and project each one, preserving order.
pub fn slim_cards<'c>(cards: impl IntoIterator<Item = &'c RawCard>) -> Vec<CardSummary> {
    cards.into_iter()
        .filter(|card| is_pokemon_card(card))
        .map(|card| CardSummary {
            name: card.name.clone(),
            image_url: card.image_url.clone(),
            image_url_hi_res: card.image_url_hi_res.clone(),
            set_code: card.set_code.clone(),
        })
        .collect()
}

/// Slim cards grouped for lookup by Pokémon slug.
///
/// `dex` holds every Pokémon slug, so a card naming a longer slug
/// (`porygon-z`) is not handed to the shorter one it contains (`porygon`).
#[derive(Debug, Clone, Default)]
pub struct CardIndex {
    cards: Vec<(String, CardSummary)>,
    dex: Vec<String>,
}

impl CardIndex {
    pub fn new<'d>(cards: Vec<CardSummary>, dex: impl IntoIterator<Item = &'d str>) -> Self {
        let mut cards: Vec<_> = cards.into_iter().map(|card| (slugify(&card.name), card)).collect();
        cards.sort_by(|(_, a), (_, b)| {
            (&a.set_code, &a.name, &a.image_url).cmp(&(&b.set_code, &b.name, &b.image_url))
        });
        Self { cards, dex: dex.into_iter().map(str::to_string).collect() }
    }

    /// Cards naming `slug`, either exactly or as a hyphen-delimited run
    /// (`dark-charizard`, `charizard-ex`), unless the run belongs to a longer
    /// dex slug.
    pub fn cards_for(&self, slug: &str) -> Vec<CardSummary> {
        let longer: Vec<&str> = self.dex.iter()
            .map(String::as_str)
            .filter(|other| *other != slug && name_mentions(other, slug))
            .collect();

        self.cards.iter()
            .filter(|(name, _)| name_mentions(name, slug))
            .filter(|(name, _)| !longer.iter().any(|other| name_mentions(name, other)))
            .map(|(_, card)| card.clone())
            .collect()
    }
}

fn name_mentions(name: &str, slug: &str) -> bool {
    if slug.is_empty() { return false }
    name.match_indices(slug).any(|(start, _)| {
        let end = start + slug.len();
        (start == 0 || name.as_bytes()[start - 1] == b'-')
            && (end == name.len() || name.as_bytes()[end] == b'-')
    })
}
