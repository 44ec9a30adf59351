use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::{keys_match, parse_int, LookupIndex};
use crate::rows::{TypeEfficacyRow, TypeRow};

/// An attacking type that deals net super-effective damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub slug: String,
    /// Product of every applicable damage factor, as a multiplier (2.0, 4.0, ...).
    pub factor: f64,
}

/// Aggregate damage multipliers of every catalog type against a defender.
///
/// `efficacy` must be keyed by `damage_type_id`. For each attacker the
/// percentages against each of the defender's types are multiplied together
/// (divided by 100 each); pairs without an efficacy row count as neutral.
/// Only aggregates strictly above 1.0 are returned, in catalog order.
pub fn weaknesses(
    catalog: &[TypeRow],
    defender_type_ids: &[&str],
    efficacy: &LookupIndex<'_, TypeEfficacyRow>,
) -> Result<Vec<Weakness>> {
    let mut out = Vec::new();
    for attacker in catalog {
        let mut factor = 1.0;
        for row in efficacy.find_all(&attacker.id) {
            if defender_type_ids.iter().any(|id| keys_match(id, &row.target_type_id)) {
                factor *= parse_int("type_efficacy", "damage_factor", &row.damage_factor)? as f64 / 100.0;
            }
        }
        if factor > 1.0 {
            out.push(Weakness { slug: attacker.identifier.clone(), factor });
        }
    }
    Ok(out)
}
