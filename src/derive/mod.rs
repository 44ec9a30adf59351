//! Pure calculators used while assembling documents.

mod cards;
mod evolution;
mod palette;
mod text;
mod units;
mod weakness;

pub use cards::{slim_cards, CardIndex, CardSummary};
pub use evolution::{evolution_buckets, ChainLink, EvolutionChain};
pub use palette::{trim_palette, ColorPalette, SWATCH_NAMES};
pub use text::{capitalize, clean_flavor_text, humanize_stat_name, slugify, NO_DESCRIPTION};
pub use units::{decimeters_to_feet, hectograms_to_pounds};
pub use weakness::{weaknesses, Weakness};
