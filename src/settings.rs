//! Runtime preferences
//!
//! In-memory only; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Particle effects on collisions
    pub particles: bool,
    /// Reduced motion (skips the scrolling guide lines)
    pub reduced_motion: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// Particle render cap
    pub max_particles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            reduced_motion: false,
            show_fps: true,
            max_particles: crate::sim::state::MAX_PARTICLES,
        }
    }
}

impl Settings {
    /// Effective particle cap (zero when particles are disabled)
    pub fn particle_cap(&self) -> usize {
        if self.particles { self.max_particles } else { 0 }
    }
}
