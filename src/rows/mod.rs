mod store;
mod tables;

pub use store::RowStore;
pub use tables::{
    FlavorTextRow, PokemonRow, PokemonStatRow, PokemonTypeRow, RawCard, RawPalette, SpeciesRow,
    StatRow, Swatch, TypeEfficacyRow, TypeRow,
};
