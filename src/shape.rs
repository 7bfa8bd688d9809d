//! Spawnable shape kinds

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Geometry primitive used for a spawned shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Box,
    Sphere,
    Pyramid,
    Torus,
    Capsule,
    Cylinder,
    Cone,
    Tube,
}

impl ShapeType {
    /// Every spawnable kind, in spawn-table order
    pub const ALL: [ShapeType; 8] = [
        ShapeType::Box,
        ShapeType::Sphere,
        ShapeType::Pyramid,
        ShapeType::Torus,
        ShapeType::Capsule,
        ShapeType::Cylinder,
        ShapeType::Cone,
        ShapeType::Tube,
    ];

    /// Draw a kind uniformly at random
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}
