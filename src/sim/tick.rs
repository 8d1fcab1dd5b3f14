//! Fixed timestep simulation tick
//!
//! Advances one run deterministically: scroll physics, lane interpolation,
//! finish/spawn checks, collision resolution, particle integration, and the
//! run-lifecycle transitions.

use glam::Vec2;

use super::collision::player_item_overlap;
use super::spawn::spawn_wave;
use super::state::{Item, MAX_PARTICLES, Particle, RunPhase, RunState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Only the latest steer command matters; the host clears one-shot fields
/// after the first substep that consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Lane-change command: -1 (left), +1 (right), 0 (none)
    pub steer: i8,
    /// Start or restart the run
    pub start: bool,
}

/// Advance the run state by one fixed timestep
pub fn tick(state: &mut RunState, input: &TickInput, dt: f32) {
    // Start command: honored from Idle and from both terminal states
    if input.start && state.phase != RunPhase::Running {
        state.begin_run();
        return;
    }

    if state.phase != RunPhase::Running {
        return;
    }

    state.time_ticks += 1;

    if input.steer != 0 {
        state.steer(input.steer);
    }

    // World scroll
    state.world_x += state.speed * dt;

    // Lane interpolation: exponential approach, clamped so a single step can
    // never overshoot the target offset
    let t = (LANE_LERP_RATE * dt).min(1.0);
    state.player.x += (state.target_offset() - state.player.x) * t;

    // Finish line
    if state.world_x > state.finish_line {
        state.reward = Some(state.finish_reward());
        state.phase = RunPhase::Finished;
        log::info!(
            "run {} finished: reward {} (strength {:.1}, coins {})",
            state.runs,
            state.finish_reward(),
            state.strength,
            state.coins
        );
        return;
    }

    // Append the next wave once the scroll crosses the spawn threshold
    if state.world_x > state.next_spawn_at {
        state.next_spawn_at += WAVE_STRIDE;
        let start_index = (state.next_spawn_at / ITEM_SPACING) as u32;
        spawn_wave(state, start_index, WAVE_SIZE);
    }

    resolve_collisions(state);
    update_particles(state, dt);

    // Strength depleted: the run fails exactly once
    if state.strength <= 0.0 {
        state.phase = RunPhase::Failed;
        log::info!(
            "run {} failed at {:.0}m",
            state.runs,
            state.distance_m()
        );
    }
}

/// Test the player footprint against both pools, apply stat deltas, and
/// remove consumed items. Per-tick O(n) filter; no spatial index needed at
/// this scale.
fn resolve_collisions(state: &mut RunState) {
    let px = state.player.x;
    let pz = state.player_depth();
    let half = state.player.half();

    let mut collected: Vec<Item> = Vec::new();
    state.upgrades.retain(|item| {
        let hit = player_item_overlap(px, pz, half, item);
        if hit {
            collected.push(*item);
        }
        !hit
    });
    for item in collected {
        state.collect_upgrade();
        spawn_burst(state, &item);
    }

    let mut struck: Vec<Item> = Vec::new();
    state.obstacles.retain(|item| {
        let hit = player_item_overlap(px, pz, half, item);
        if hit {
            struck.push(*item);
        }
        !hit
    });
    for item in struck {
        state.hit_obstacle();
        spawn_burst(state, &item);
    }
}

/// Emit a decorative burst at the impact point. Spread comes from hash
/// mixing off the tick counter so the run RNG is never consumed for visuals.
fn spawn_burst(state: &mut RunState, item: &Item) {
    let screen_y = VIEW_HEIGHT - (item.z - state.world_x);

    for i in 0..BURST_SIZE {
        if state.particles.len() >= MAX_PARTICLES {
            state.particles.remove(0);
        }
        let hash = (state.time_ticks as u32)
            .wrapping_mul(2654435761)
            .wrapping_add(i.wrapping_mul(7919))
            .wrapping_add((item.lane_x as i32 as u32).wrapping_mul(31337));
        let r1 = (hash % 1000) as f32 / 1000.0;
        let r2 = ((hash >> 10) % 1000) as f32 / 1000.0;
        let r3 = ((hash >> 20) % 1000) as f32 / 1000.0;

        state.particles.push(Particle {
            pos: Vec2::new(item.lane_x, screen_y),
            vel: Vec2::new(r1 * 120.0 - 60.0, r2 * 100.0 - 80.0),
            life: 1.0,
            size: 3.0 + r3 * 4.0,
            kind: item.kind,
        });
    }
}

/// Integrate particle motion and expire dead ones
fn update_particles(state: &mut RunState, dt: f32) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.vel.y += PARTICLE_GRAVITY * dt;
        particle.life -= dt * PARTICLE_DECAY;
    }
    state.particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ItemKind;

    /// A running state with nothing on the track and spawning/finish pushed
    /// far away, for tests that isolate one mechanism.
    fn bare_running_state(seed: u64) -> RunState {
        let mut state = RunState::new(seed);
        state.begin_run();
        state.obstacles.clear();
        state.upgrades.clear();
        state.next_spawn_at = f32::MAX;
        state.finish_line = f32::MAX;
        state
    }

    fn upgrade_at(state: &RunState, dz: f32) -> Item {
        Item {
            lane_x: state.player.x,
            z: state.player_depth() + dz,
            radius: UPGRADE_RADIUS,
            kind: ItemKind::Upgrade,
        }
    }

    fn obstacle_at(state: &RunState, dz: f32) -> Item {
        Item {
            lane_x: state.player.x,
            z: state.player_depth() + dz,
            radius: OBSTACLE_RADIUS,
            kind: ItemKind::Obstacle,
        }
    }

    #[test]
    fn test_start_command_begins_run() {
        let mut state = RunState::new(12345);
        assert_eq!(state.phase, RunPhase::Idle);

        // Ticks without start leave Idle untouched
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.world_x, 0.0);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(
            (state.obstacles.len() + state.upgrades.len()) as u32,
            WAVE_SIZE
        );
    }

    #[test]
    fn test_scroll_advances_and_distance_tracks() {
        let mut state = bare_running_state(1);
        tick(&mut state, &TickInput::default(), SIM_DT);
        let expected = BASE_SPEED * SIM_DT;
        assert!((state.world_x - expected).abs() < 1e-4);
        assert!((state.distance_m() - expected / DISTANCE_SCALE).abs() < 1e-4);
    }

    #[test]
    fn test_lane_convergence_without_overshoot() {
        let mut state = bare_running_state(1);

        let steer = TickInput {
            steer: 1,
            ..Default::default()
        };
        tick(&mut state, &steer, SIM_DT);
        assert_eq!(state.target_offset(), LANE_OFFSETS[2]);

        let mut prev = state.player.x;
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert!(state.player.x >= prev, "lane motion reversed");
            assert!(state.player.x <= LANE_OFFSETS[2] + 1e-3, "overshoot");
            prev = state.player.x;
        }
        assert!((state.player.x - LANE_OFFSETS[2]).abs() < 1.0);
    }

    #[test]
    fn test_upgrade_collection() {
        let mut state = bare_running_state(1);
        // Just ahead of the player so the hit lands after this tick's scroll
        state.upgrades.push(upgrade_at(&state, 5.0));

        let coins = state.coins;
        let strength = state.strength;
        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.upgrades.is_empty(), "collected item not removed");
        assert_eq!(state.coins, coins + UPGRADE_COINS);
        assert!(state.strength > strength);
        assert!(state.speed > BASE_SPEED);
        assert!(!state.particles.is_empty(), "no burst on collection");
    }

    #[test]
    fn test_obstacle_impact() {
        let mut state = bare_running_state(1);
        state.obstacles.push(obstacle_at(&state, 5.0));

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.obstacles.is_empty(), "struck item not removed");
        assert!((state.strength - (START_STRENGTH - OBSTACLE_STRENGTH)).abs() < 1e-4);
        // Speed was already at the floor and must stay there
        assert_eq!(state.speed, BASE_SPEED);
        assert!(!state.particles.is_empty(), "no burst on impact");
    }

    #[test]
    fn test_failure_fires_once_and_freezes() {
        let mut state = bare_running_state(1);
        state.strength = OBSTACLE_STRENGTH; // one hit from zero
        state.obstacles.push(obstacle_at(&state, 5.0));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, RunPhase::Failed);
        assert_eq!(state.strength, 0.0);

        // Frozen: further ticks change nothing
        let world_x = state.world_x;
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, RunPhase::Failed);
        assert_eq!(state.world_x, world_x);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_finish_fires_once_with_reward() {
        let mut state = bare_running_state(1);
        state.finish_line = FINISH_LINE;
        state.coins = 10;
        state.world_x = FINISH_LINE - 0.01;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, RunPhase::Finished);
        let expected = (START_STRENGTH * 20.0 + 10.0).floor() as u32;
        assert_eq!(state.reward, Some(expected));

        let world_x = state.world_x;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, RunPhase::Finished);
        assert_eq!(state.reward, Some(expected));
        assert_eq!(state.world_x, world_x);
    }

    #[test]
    fn test_restart_after_terminal_resets() {
        let mut state = bare_running_state(1);
        state.strength = OBSTACLE_STRENGTH;
        state.obstacles.push(obstacle_at(&state, 5.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, RunPhase::Failed);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.world_x, 0.0);
        assert_eq!(state.coins, 0);
        assert_eq!(state.strength, START_STRENGTH);
        assert_eq!(state.speed, BASE_SPEED);
        assert_eq!(
            (state.obstacles.len() + state.upgrades.len()) as u32,
            WAVE_SIZE
        );
    }

    #[test]
    fn test_spawner_appends_waves_ahead() {
        let mut state = RunState::new(99);
        state.begin_run();
        assert_eq!(
            (state.obstacles.len() + state.upgrades.len()) as u32,
            WAVE_SIZE
        );

        // First tick crosses the initial threshold at 0 and appends a wave
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(
            (state.obstacles.len() + state.upgrades.len()) as u32,
            2 * WAVE_SIZE
        );
        assert_eq!(state.next_spawn_at, WAVE_STRIDE);

        // Everything just appended sits ahead of the player's reach
        let reach = state.player_depth() + state.player.half();
        let ahead = state
            .obstacles
            .iter()
            .chain(state.upgrades.iter())
            .filter(|item| item.z - item.radius > reach)
            .count();
        assert_eq!(ahead as u32, 2 * WAVE_SIZE);
    }

    #[test]
    fn test_particles_decay_and_expire() {
        let mut state = bare_running_state(1);
        state.upgrades.push(upgrade_at(&state, 5.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.particles.len() as u32, BURST_SIZE);

        let life_before = state.particles[0].life;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.particles[0].life < life_before);

        // A second of simulated time outlives the whole burst
        for _ in 0..150 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = RunState::new(99999);
        let mut b = RunState::new(99999);

        let script = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                steer: 1,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                steer: -1,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &script {
            for _ in 0..60 {
                tick(&mut a, input, SIM_DT);
                tick(&mut b, input, SIM_DT);
            }
        }

        let json_a = serde_json::to_string(&a).expect("serialize");
        let json_b = serde_json::to_string(&b).expect("serialize");
        assert_eq!(json_a, json_b);
    }
}
