//! Run state and core simulation types
//!
//! Everything the renderer and overlay read each frame lives here, exposed
//! through plain read-only snapshots (`Frame`, `Hud`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lane_offset;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Pre-run, overlay displayed, waiting for the start command
    Idle,
    /// Active gameplay
    Running,
    /// Crossed the finish line; reward banked
    Finished,
    /// Strength depleted to zero
    Failed,
}

impl RunPhase {
    /// Terminal phases halt the simulation until an explicit restart
    pub fn is_terminal(self) -> bool {
        matches!(self, RunPhase::Finished | RunPhase::Failed)
    }
}

/// Item kinds, also used as the particle tint tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Obstacle,
    Upgrade,
}

/// A track item (obstacle or upgrade)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Item {
    /// Lane offset (one of the three fixed lanes at spawn time)
    pub lane_x: f32,
    /// Scroll-distance position
    pub z: f32,
    /// Footprint radius
    pub radius: f32,
    pub kind: ItemKind,
}

/// A particle for collision feedback (visual only, never gameplay-affecting)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// View-space position (x = lane axis, y = screen row)
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, decays linearly; removed at 0
    pub life: f32,
    pub size: f32,
    /// Item kind that spawned the burst, for color lookup
    pub kind: ItemKind,
}

/// Maximum live particles; oldest are evicted first
pub const MAX_PARTICLES: usize = 256;

/// The player's avatar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Lane position, interpolated toward the target lane offset
    pub x: f32,
    /// Avatar edge length; grows with upgrades, shrinks with obstacles
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: lane_offset(CENTER_LANE),
            size: PLAYER_START_SIZE,
        }
    }
}

impl Player {
    /// Half the avatar footprint, used by the collision resolver
    #[inline]
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }

    pub fn grow(&mut self) {
        self.size = (self.size + UPGRADE_SIZE).min(PLAYER_MAX_SIZE);
    }

    pub fn shrink(&mut self) {
        self.size = (self.size - OBSTACLE_SIZE).max(PLAYER_MIN_SIZE);
    }
}

/// HUD scalars displayed every frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hud {
    pub strength: f32,
    pub coins: u32,
    /// Meters travelled (displayed floored)
    pub distance: f32,
}

/// Read-only per-tick snapshot for the rendering collaborator
#[derive(Debug)]
pub struct Frame<'a> {
    pub world_x: f32,
    pub finish_line: f32,
    pub obstacles: &'a [Item],
    pub upgrades: &'a [Item],
    pub particles: &'a [Particle],
    pub player: Player,
    pub hud: Hud,
}

/// Complete run state (deterministic, serializable apart from particles)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Session seed for reproducible wave layouts
    pub seed: u64,
    /// Runs started this session; mixed into wave seeds so restarts differ
    pub runs: u32,
    pub phase: RunPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cumulative world-scroll distance
    pub world_x: f32,
    pub coins: u32,
    /// Clamped to >= 0; zero fails the run
    pub strength: f32,
    /// Clamped to >= BASE_SPEED
    pub speed: f32,
    /// Index into the three fixed lane offsets
    pub target_lane: usize,
    /// Scroll position at which the next wave is appended
    pub next_spawn_at: f32,
    pub finish_line: f32,
    /// Banked on finish, exactly once per run
    pub reward: Option<u32>,
    pub player: Player,
    pub obstacles: Vec<Item>,
    pub upgrades: Vec<Item>,
    /// Visual particles (not part of the deterministic state)
    #[serde(skip)]
    pub particles: Vec<Particle>,
}

impl RunState {
    /// Create session state: Idle, first wave already on the track
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            runs: 0,
            phase: RunPhase::Idle,
            time_ticks: 0,
            world_x: 0.0,
            coins: 0,
            strength: START_STRENGTH,
            speed: BASE_SPEED,
            target_lane: CENTER_LANE,
            next_spawn_at: 0.0,
            finish_line: FINISH_LINE,
            reward: None,
            player: Player::default(),
            obstacles: Vec::new(),
            upgrades: Vec::new(),
            particles: Vec::new(),
        };
        super::spawn::spawn_wave(&mut state, 0, WAVE_SIZE);
        state
    }

    /// Re-initialize everything and enter Running
    pub fn begin_run(&mut self) {
        self.runs += 1;
        self.phase = RunPhase::Running;
        self.time_ticks = 0;
        self.world_x = 0.0;
        self.coins = 0;
        self.strength = START_STRENGTH;
        self.speed = BASE_SPEED;
        self.target_lane = CENTER_LANE;
        self.next_spawn_at = 0.0;
        self.reward = None;
        self.player = Player::default();
        self.obstacles.clear();
        self.upgrades.clear();
        self.particles.clear();
        super::spawn::spawn_wave(self, 0, WAVE_SIZE);
        log::info!("run {} started (seed {})", self.runs, self.seed);
    }

    /// Shift the target lane by -1 (left) or +1 (right), clamped at the edges
    pub fn steer(&mut self, direction: i8) {
        let lanes = LANE_OFFSETS.len() as i32;
        let next = (self.target_lane as i32 + i32::from(direction)).clamp(0, lanes - 1);
        self.target_lane = next as usize;
    }

    /// Offset of the current target lane
    #[inline]
    pub fn target_offset(&self) -> f32 {
        lane_offset(self.target_lane)
    }

    /// World depth the player occupies for collision purposes
    #[inline]
    pub fn player_depth(&self) -> f32 {
        self.world_x + PLAYER_DEPTH
    }

    /// Meters travelled
    #[inline]
    pub fn distance_m(&self) -> f32 {
        self.world_x / DISTANCE_SCALE
    }

    /// Apply upgrade collection deltas
    pub fn collect_upgrade(&mut self) {
        self.strength += UPGRADE_STRENGTH;
        self.speed += UPGRADE_SPEED;
        self.coins += UPGRADE_COINS;
        self.player.grow();
    }

    /// Apply obstacle impact deltas, clamped to the stat floors
    pub fn hit_obstacle(&mut self) {
        self.strength = (self.strength - OBSTACLE_STRENGTH).max(0.0);
        self.speed = (self.speed - OBSTACLE_SPEED).max(BASE_SPEED);
        self.player.shrink();
    }

    /// Reward banked when crossing the finish line
    pub fn finish_reward(&self) -> u32 {
        (self.strength * 20.0 + self.coins as f32).floor() as u32
    }

    pub fn hud(&self) -> Hud {
        Hud {
            strength: self.strength,
            coins: self.coins,
            distance: self.distance_m(),
        }
    }

    /// Per-tick read-only snapshot for the renderer
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            world_x: self.world_x,
            finish_line: self.finish_line,
            obstacles: &self.obstacles,
            upgrades: &self.upgrades,
            particles: &self.particles,
            player: self.player,
            hud: self.hud(),
        }
    }
}
