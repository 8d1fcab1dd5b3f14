//! Wave spawning
//!
//! Waves are generated deterministically: each wave's RNG is seeded from the
//! session seed, the run counter, and the wave's start index, so a given
//! (seed, run) always produces the same track while restarts stay fresh.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Item, ItemKind, RunState};
use crate::consts::*;
use crate::lane_offset;

/// Seed for the wave starting at `start_index`, mixed per the run
fn wave_seed(state: &RunState, start_index: u32) -> u64 {
    u64::from(start_index)
        .wrapping_mul(2654435761)
        .wrapping_add(state.seed)
        .wrapping_add(u64::from(state.runs) << 17)
}

/// Append a batch of `count` items at increasing scroll offsets ahead of the
/// player, each independently randomized between lane and kind.
pub fn spawn_wave(state: &mut RunState, start_index: u32, count: u32) {
    let mut rng = Pcg32::seed_from_u64(wave_seed(state, start_index));

    for i in 0..count {
        let slot = start_index + i;
        let lane_x = lane_offset(rng.random_range(0..LANE_OFFSETS.len()));
        let kind = if rng.random_bool(UPGRADE_CHANCE) {
            ItemKind::Upgrade
        } else {
            ItemKind::Obstacle
        };
        let radius = match kind {
            ItemKind::Upgrade => UPGRADE_RADIUS,
            ItemKind::Obstacle => OBSTACLE_RADIUS,
        };
        let item = Item {
            lane_x,
            z: FIRST_ITEM_Z + slot as f32 * ITEM_SPACING,
            radius,
            kind,
        };
        match kind {
            ItemKind::Upgrade => state.upgrades.push(item),
            ItemKind::Obstacle => state.obstacles.push(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RunState;

    fn all_items(state: &RunState) -> Vec<Item> {
        let mut items: Vec<Item> = state
            .obstacles
            .iter()
            .chain(state.upgrades.iter())
            .copied()
            .collect();
        items.sort_by(|a, b| a.z.total_cmp(&b.z));
        items
    }

    #[test]
    fn test_wave_size_and_spacing() {
        let mut state = RunState::new(42);
        state.obstacles.clear();
        state.upgrades.clear();

        spawn_wave(&mut state, 6, WAVE_SIZE);
        let items = all_items(&state);
        assert_eq!(items.len() as u32, WAVE_SIZE);

        for (i, item) in items.iter().enumerate() {
            let expected = FIRST_ITEM_Z + (6 + i as u32) as f32 * ITEM_SPACING;
            assert_eq!(item.z, expected);
        }
    }

    #[test]
    fn test_items_land_on_fixed_lanes() {
        let mut state = RunState::new(42);
        state.obstacles.clear();
        state.upgrades.clear();

        spawn_wave(&mut state, 0, 60);
        for item in all_items(&state) {
            assert!(
                LANE_OFFSETS.contains(&item.lane_x),
                "item off-lane at x={}",
                item.lane_x
            );
        }
    }

    #[test]
    fn test_radius_matches_kind() {
        let mut state = RunState::new(42);
        for item in &state.upgrades {
            assert_eq!(item.radius, UPGRADE_RADIUS);
        }
        for item in &state.obstacles {
            assert_eq!(item.radius, OBSTACLE_RADIUS);
        }
    }

    #[test]
    fn test_same_seed_same_wave() {
        let a = RunState::new(1234);
        let b = RunState::new(1234);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.upgrades.len(), b.upgrades.len());
        for (x, y) in all_items(&a).iter().zip(all_items(&b).iter()) {
            assert_eq!(x.lane_x, y.lane_x);
            assert_eq!(x.z, y.z);
            assert_eq!(x.kind, y.kind);
        }
    }

    #[test]
    fn test_restart_reshuffles_waves() {
        let mut a = RunState::new(1234);
        a.begin_run();
        let first = all_items(&a);

        a.begin_run();
        let second = all_items(&a);

        // Same count, but the layout should differ between runs
        assert_eq!(first.len(), second.len());
        let identical = first
            .iter()
            .zip(second.iter())
            .all(|(x, y)| x.lane_x == y.lane_x && x.kind == y.kind);
        assert!(!identical, "restart produced an identical wave layout");
    }
}
