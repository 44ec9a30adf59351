use crate::assemble::{PageInfo, PokemonListPage, SlimPokemon};

/// Number of pages needed for `total` items, at least one.
fn num_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 { return 1 }
    total.div_ceil(page_size).max(1)
}

/// Split id-ordered Pokémon into 1-based list pages; the last page holds the remainder.
///
/// An empty input still yields a single empty page so the listing route always resolves.
pub fn paginate(pokemon: Vec<SlimPokemon>, page_size: usize) -> Vec<PokemonListPage> {
    let total = pokemon.len();
    let page_size = page_size.max(1);
    let total_num_pages = num_pages(total, page_size);

    let mut pages = Vec::with_capacity(total_num_pages);
    let mut rest = pokemon.into_iter();
    for page in 1..=total_num_pages {
        pages.push(PokemonListPage {
            page_info: PageInfo { page, total_num_pages, page_size, total_num_pokemon: total },
            pokemon: rest.by_ref().take(page_size).collect(),
        });
    }
    pages
}
