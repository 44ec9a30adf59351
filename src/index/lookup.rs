use std::fmt::Display;

use ahash::AHashMap;
use smallvec::SmallVec;

use super::normalize_key;

/// Read-only hash index over one table, keyed by a normalized column.
///
/// Row positions are kept in source order, so `find` returns the first row a
/// linear scan would have found and `find_all` preserves table order.
#[derive(Debug, Clone)]
pub struct LookupIndex<'a, R> {
    rows: &'a [R],
    positions: AHashMap<String, SmallVec<[u32; 4]>>,
}

impl<'a, R> LookupIndex<'a, R> {
    pub fn build(rows: &'a [R], key: impl Fn(&R) -> &str) -> Self {
        let mut positions: AHashMap<String, SmallVec<[u32; 4]>> = AHashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            positions
                .entry(normalize_key(key(row)).into_owned())
                .or_default()
                .push(i as u32);
        }
        Self { rows, positions }
    }

    /// First row whose key equals `value`, if any.
    pub fn find(&self, value: impl Display) -> Option<&'a R> {
        let rows = self.rows;
        self.positions
            .get(normalize_key(&value.to_string()).as_ref())
            .and_then(|hits| hits.first())
            .map(|&i| &rows[i as usize])
    }

    /// Every row whose key equals `value`, in table order.
    pub fn find_all(&self, value: impl Display) -> Vec<&'a R> {
        let rows = self.rows;
        self.positions
            .get(normalize_key(&value.to_string()).as_ref())
            .map(|hits| hits.iter().map(|&i| &rows[i as usize]).collect())
            .unwrap_or_default()
    }

    /// Rows satisfying `predicate`, in table order. This is a scan, not a lookup.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<&'a R> {
        self.rows.iter().filter(|row| predicate(row)).collect()
    }

    pub fn contains(&self, value: impl Display) -> bool {
        self.positions.contains_key(normalize_key(&value.to_string()).as_ref())
    }

    /// Number of distinct keys.
    pub fn num_keys(&self) -> usize { self.positions.len() }
}
