//! Spawn color table
//!
//! Declarative palette the spawner picks from: the stock colors plus a few
//! extras the stock set lacks. Navy is defined for callers but kept out of
//! the spawn table.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGBA color, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    pub const LIME: Rgba = Rgba::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Rgba = Rgba::rgb(0.0, 1.0, 1.0);
    pub const SILVER: Rgba = Rgba::rgb(0.753, 0.753, 0.753);
    pub const GRAY: Rgba = Rgba::rgb(0.5, 0.5, 0.5);
    pub const MAROON: Rgba = Rgba::rgb(0.5, 0.0, 0.0);
    pub const OLIVE: Rgba = Rgba::rgb(0.5, 0.5, 0.0);
    pub const BROWN: Rgba = Rgba::rgb(0.6, 0.4, 0.2);
    pub const GREEN: Rgba = Rgba::rgb(0.0, 0.5, 0.0);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(0.667, 0.667, 0.667);
    pub const MAGENTA: Rgba = Rgba::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Rgba = Rgba::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Rgba = Rgba::rgb(0.5, 0.0, 0.5);
    pub const TEAL: Rgba = Rgba::rgb(0.0, 0.5, 0.5);
    pub const NAVY: Rgba = Rgba::rgb(0.0, 0.0, 0.5);
}

/// Colors the spawner draws from
pub const SPAWN_COLORS: [Rgba; 18] = [
    Rgba::BLACK,
    Rgba::WHITE,
    Rgba::RED,
    Rgba::LIME,
    Rgba::BLUE,
    Rgba::YELLOW,
    Rgba::CYAN,
    Rgba::SILVER,
    Rgba::GRAY,
    Rgba::MAROON,
    Rgba::OLIVE,
    Rgba::BROWN,
    Rgba::GREEN,
    Rgba::LIGHT_GRAY,
    Rgba::MAGENTA,
    Rgba::ORANGE,
    Rgba::PURPLE,
    Rgba::TEAL,
];

/// Draw a spawn color uniformly at random
pub fn random_color(rng: &mut impl Rng) -> Rgba {
    SPAWN_COLORS[rng.random_range(0..SPAWN_COLORS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn test_spawn_colors_are_distinct() {
        for (i, a) in SPAWN_COLORS.iter().enumerate() {
            for b in &SPAWN_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_components_are_normalized() {
        for color in &SPAWN_COLORS {
            for component in [color.r, color.g, color.b, color.a] {
                assert!((0.0..=1.0).contains(&component));
            }
        }
    }

    #[test]
    fn test_random_color_comes_from_table() {
        let mut rng = seeded_rng(5);
        for _ in 0..100 {
            let color = random_color(&mut rng);
            assert!(SPAWN_COLORS.contains(&color));
        }
    }
}
