mod assembler;
mod documents;

pub use assembler::Assembler;
pub use documents::{
    Efficacy, EntityRef, PageInfo, PokemonDetails, PokemonListPage, SlimPokemon, StatEntry,
    TypeDetails,
};
