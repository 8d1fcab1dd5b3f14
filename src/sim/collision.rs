//! Collision detection for the lane/scroll plane
//!
//! Items and the player are tested as axis-aligned footprints: two intervals
//! per entity (lane axis, scroll-depth axis), overlapping only if both axes
//! overlap independently. Not a true circle-box test; at this scale the
//! separation test is indistinguishable in play.

use super::state::Item;

/// Interval overlap on a single axis
#[inline]
pub fn spans_overlap(center_a: f32, half_a: f32, center_b: f32, half_b: f32) -> bool {
    (center_a - center_b).abs() < half_a + half_b
}

/// Player footprint vs item footprint, both axes
pub fn player_item_overlap(player_x: f32, player_depth: f32, player_half: f32, item: &Item) -> bool {
    spans_overlap(player_x, player_half, item.lane_x, item.radius)
        && spans_overlap(player_depth, player_half, item.z, item.radius)
}
