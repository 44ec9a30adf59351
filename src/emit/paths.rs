//! Output-relative locations of every emitted document.

pub const LIST_DIR: &str = "pokemon/list";
pub const DETAILS_DIR: &str = "pokemon/details";
pub const TYPES_DIR: &str = "types";
pub const SEARCH_INDEX: &str = "search/index.json";
pub const TYPES_INDEX: &str = "types/index.json";
pub const SLIM_CARDS: &str = "cards/slim_cards.json";
pub const MANIFEST: &str = "manifest.json";

pub fn list_page(page: usize) -> String { format!("{LIST_DIR}/{page}.json") }

pub fn pokemon_details(slug: &str) -> String { format!("{DETAILS_DIR}/{slug}.json") }

pub fn type_details(slug: &str) -> String { format!("{TYPES_DIR}/{slug}.json") }
