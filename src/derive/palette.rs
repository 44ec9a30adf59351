use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rows::{RawPalette, Swatch};

/// Swatch names every trimmed palette carries, present or not.
pub const SWATCH_NAMES: [&str; 6] = ["Vibrant", "DarkVibrant", "LightVibrant", "Muted", "DarkMuted", "LightMuted"];

pub type Rgb = [u8; 3];

/// Palette reduced to one `rgb` triple per swatch name; `None` marks an absent swatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette(pub BTreeMap<String, Option<Rgb>>);

impl ColorPalette {
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.0.get(name).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Option::is_none)
    }
}

/// Drop swatch populations, keeping the `rgb` triple under each name.
///
/// The canonical swatch names are always present so a consumer can walk its
/// own fallback order; a missing palette yields all of them as `None`.
pub fn trim_palette(raw: Option<&RawPalette>) -> ColorPalette {
    let mut trimmed: BTreeMap<String, Option<Rgb>> =
        SWATCH_NAMES.iter().map(|name| (name.to_string(), None)).collect();

    for (name, swatch) in raw.into_iter().flatten() {
        trimmed.insert(name.clone(), swatch.as_ref().and_then(to_rgb));
    }
    ColorPalette(trimmed)
}

fn to_rgb(swatch: &Swatch) -> Option<Rgb> {
    match swatch.rgb.as_slice() {
        &[r, g, b] if [r, g, b].iter().all(|c| c.is_finite()) => {
            let channel = |c: f64| c.round().clamp(0.0, 255.0) as u8;
            Some([channel(r), channel(g), channel(b)])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swatch(rgb: &[f64]) -> Option<Swatch> {
        Some(Swatch { rgb: rgb.to_vec(), population: Some(1024.0) })
    }

    #[test]
    fn keeps_only_rgb() {
        let raw = RawPalette::from([
            ("Vibrant".to_string(), swatch(&[248.0, 208.0, 48.0])),
            ("DarkMuted".to_string(), None),
        ]);
        let palette = trim_palette(Some(&raw));
        assert_eq!(palette.get("Vibrant"), Some([248, 208, 48]));
        assert_eq!(palette.get("DarkMuted"), None);
        assert_eq!(palette.0.len(), SWATCH_NAMES.len());
    }

    #[test]
    fn missing_palette_keeps_every_name() {
        let palette = trim_palette(None);
        assert!(palette.is_empty());
        assert!(SWATCH_NAMES.iter().all(|name| palette.0.contains_key(*name)));
    }

    #[test]
    fn fractional_and_malformed_channels() {
        let raw = RawPalette::from([
            ("Muted".to_string(), swatch(&[10.4, 10.6, 300.0])),
            ("LightMuted".to_string(), swatch(&[1.0, 2.0])),
        ]);
        let palette = trim_palette(Some(&raw));
        assert_eq!(palette.get("Muted"), Some([10, 11, 255]));
        assert_eq!(palette.get("LightMuted"), None);
    }

    #[test]
    fn serializes_absent_swatches_as_null() {
        let raw = RawPalette::from([("Vibrant".to_string(), swatch(&[1.0, 2.0, 3.0]))]);
        let json = serde_json::to_value(trim_palette(Some(&raw))).unwrap();
        assert_eq!(json["Vibrant"], serde_json::json!([1, 2, 3]));
        assert!(json["LightVibrant"].is_null());
    }
}
