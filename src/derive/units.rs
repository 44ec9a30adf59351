//! Metric-to-imperial conversions for the dex's height and weight columns.

const DECIMETERS_PER_FOOT: f64 = 3.048;
const HECTOGRAMS_PER_POUND: f64 = 4.536;

/// Round half away from zero to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn decimeters_to_feet(decimeters: f64) -> f64 {
    round2(decimeters / DECIMETERS_PER_FOOT)
}

pub fn hectograms_to_pounds(hectograms: f64) -> f64 {
    round2(hectograms / HECTOGRAMS_PER_POUND)
}
