//! Static level layout
//!
//! Platform placement the physics collaborator turns into static bodies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static platform, centered on `center`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub center: Vec2,
    /// Uniform scale applied to the base platform sprite
    pub scale: f32,
}

/// Base platform size before scaling
pub const PLATFORM_SIZE: Vec2 = Vec2::new(400.0, 32.0);

/// Ground plus three ledges
pub const PLATFORMS: [Platform; 4] = [
    Platform {
        center: Vec2::new(400.0, 568.0),
        scale: 2.0,
    },
    Platform {
        center: Vec2::new(600.0, 400.0),
        scale: 1.0,
    },
    Platform {
        center: Vec2::new(50.0, 250.0),
        scale: 1.0,
    },
    Platform {
        center: Vec2::new(750.0, 220.0),
        scale: 1.0,
    },
];

impl Platform {
    pub fn size(&self) -> Vec2 {
        PLATFORM_SIZE * self.scale
    }

    /// Top-left and bottom-right corners
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.size() / 2.0;
        (self.center - half, self.center + half)
    }
}
