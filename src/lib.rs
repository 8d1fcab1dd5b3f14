//! Lane Rush - a three-lane endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scroll physics, spawning, collisions, run lifecycle)
//! - `renderer`: WebGPU rendering pipeline
//! - `ui`: Overlay text for the run lifecycle
//! - `settings`: Runtime preferences

pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth motion)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// The three lane offsets, left to right
    pub const LANE_OFFSETS: [f32; 3] = [-180.0, 0.0, 180.0];
    /// Index of the center lane
    pub const CENTER_LANE: usize = 1;
    /// Rate at which the player converges on the target lane (per second)
    pub const LANE_LERP_RATE: f32 = 8.0;

    /// View-space dimensions (track view, y grows downward like the canvas)
    pub const VIEW_HALF_WIDTH: f32 = 260.0;
    pub const VIEW_HEIGHT: f32 = 480.0;
    /// Screen row the player occupies
    pub const PLAYER_ROW: f32 = 380.0;
    /// Player world depth ahead of the scroll origin (VIEW_HEIGHT - PLAYER_ROW)
    pub const PLAYER_DEPTH: f32 = 100.0;

    /// Scroll speed floor and starting value
    pub const BASE_SPEED: f32 = 220.0;
    /// Scroll distance at which the run is won
    pub const FINISH_LINE: f32 = 1800.0;
    /// World scroll units per displayed meter
    pub const DISTANCE_SCALE: f32 = 6.0;

    /// Player avatar sizing
    pub const PLAYER_START_SIZE: f32 = 40.0;
    pub const PLAYER_MIN_SIZE: f32 = 26.0;
    pub const PLAYER_MAX_SIZE: f32 = 80.0;

    /// Starting strength; the run fails when it reaches zero
    pub const START_STRENGTH: f32 = 1.0;

    /// Items per spawned wave
    pub const WAVE_SIZE: u32 = 6;
    /// Scroll spacing between consecutive items in a wave
    pub const ITEM_SPACING: f32 = 220.0;
    /// Scroll position of the very first item
    pub const FIRST_ITEM_Z: f32 = 350.0;
    /// Scroll distance covered by one wave (advances the spawn threshold)
    pub const WAVE_STRIDE: f32 = WAVE_SIZE as f32 * ITEM_SPACING;
    /// Probability that a spawned item is an upgrade (rest are obstacles)
    pub const UPGRADE_CHANCE: f64 = 0.45;

    /// Item footprints
    pub const UPGRADE_RADIUS: f32 = 26.0;
    pub const OBSTACLE_RADIUS: f32 = 32.0;

    /// Stat deltas on upgrade collection
    pub const UPGRADE_STRENGTH: f32 = 0.3;
    pub const UPGRADE_SPEED: f32 = 18.0;
    pub const UPGRADE_SIZE: f32 = 4.0;
    pub const UPGRADE_COINS: u32 = 2;

    /// Stat deltas on obstacle impact
    pub const OBSTACLE_STRENGTH: f32 = 0.4;
    pub const OBSTACLE_SPEED: f32 = 40.0;
    pub const OBSTACLE_SIZE: f32 = 6.0;

    /// Particles per collision burst
    pub const BURST_SIZE: u32 = 8;
    /// Particle life decay per second
    pub const PARTICLE_DECAY: f32 = 1.6;
    /// Downward particle acceleration
    pub const PARTICLE_GRAVITY: f32 = 120.0;

    /// Pointer drag distance that triggers a lane change (CSS pixels)
    pub const DRAG_THRESHOLD: f32 = 50.0;
}

/// Offset of a lane by index, clamped to the track
#[inline]
pub fn lane_offset(lane: usize) -> f32 {
    consts::LANE_OFFSETS[lane.min(consts::LANE_OFFSETS.len() - 1)]
}
