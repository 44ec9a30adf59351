mod key;
mod lookup;
mod tables;

pub use key::{keys_match, normalize_key};
pub(crate) use key::{parse_id, parse_int};
pub use lookup::LookupIndex;
pub use tables::Indexes;
