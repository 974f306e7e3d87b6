#![allow(dead_code)]

use scale_engine::{hsl_to_hex, Hex, Hsl};

/// Fully saturated seeds spread around the hue circle.
pub fn hue_wheel(count: usize) -> Vec<Hex> {
    (0..count)
        .map(|i| hsl_to_hex(Hsl::new(i as f64 * 360.0 / count as f64, 100.0, 50.0)))
        .collect()
}

/// A mix of saturated, muted, very dark and very light seeds.
pub fn assorted_seeds() -> Vec<Hex> {
    [
        "#007DB8", "#E5484D", "#FFE629", "#30A46C", "#8E4EC6", "#F76B15", "#12A594", "#6B8A99",
        "#1A1A2E", "#F5F0E1", "#808080", "#000000", "#FFFFFF",
    ]
    .iter()
    .map(|hex| hex.parse().unwrap())
    .collect()
}
