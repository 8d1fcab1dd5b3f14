//! Scene builder
//!
//! Turns a simulation `Frame` snapshot into a vertex list: scrolling guide
//! lines, track border, finish band, items, player, particles, emitted back
//! to front.

use glam::Vec2;

use super::shapes::{circle, quad, rect_outline};
use super::vertex::{Vertex, colors};
use crate::Settings;
use crate::consts::*;
use crate::sim::{Frame, Item, ItemKind};

/// Guide-line scroll geometry
const GUIDE_LINES: u32 = 30;
const GUIDE_SPACING: f32 = 60.0;
const GUIDE_WRAP: f32 = 600.0;

/// Track border rectangle (view space)
const BORDER_TOP: f32 = 40.0;
const BORDER_BOTTOM: f32 = 460.0;
const BORDER_HALF_WIDTH: f32 = 240.0;

const CIRCLE_SEGMENTS: u32 = 20;

/// Screen row of a scroll position, given the current world scroll
#[inline]
pub fn screen_row(world_x: f32, z: f32) -> f32 {
    VIEW_HEIGHT - (z - world_x)
}

#[inline]
fn on_screen(row: f32) -> bool {
    (0.0..=VIEW_HEIGHT).contains(&row)
}

fn item_color(kind: ItemKind) -> [f32; 4] {
    match kind {
        ItemKind::Upgrade => colors::UPGRADE,
        ItemKind::Obstacle => colors::OBSTACLE,
    }
}

fn push_items(vertices: &mut Vec<Vertex>, world_x: f32, items: &[Item]) {
    for item in items {
        let row = screen_row(world_x, item.z);
        if !on_screen(row) {
            continue;
        }
        vertices.extend(circle(
            Vec2::new(item.lane_x, row),
            item.radius,
            item_color(item.kind),
            CIRCLE_SEGMENTS,
        ));
    }
}

/// Build the full frame's vertex list
pub fn frame_vertices(frame: &Frame<'_>, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(2048);

    // Scrolling guide lines
    if !settings.reduced_motion {
        for i in 0..GUIDE_LINES {
            let z = (frame.world_x + i as f32 * GUIDE_SPACING) % GUIDE_WRAP;
            vertices.extend(quad(
                Vec2::new(0.0, VIEW_HEIGHT - z),
                VIEW_HALF_WIDTH,
                1.0,
                colors::TRACK_LINE,
            ));
        }
    }

    // Track border
    let border_center = (BORDER_TOP + BORDER_BOTTOM) / 2.0;
    let border_half_h = (BORDER_BOTTOM - BORDER_TOP) / 2.0;
    vertices.extend(rect_outline(
        Vec2::new(0.0, border_center),
        BORDER_HALF_WIDTH,
        border_half_h,
        4.0,
        colors::TRACK_BORDER,
    ));

    // Finish band: translucent white full width, gold left half on top
    let finish_row = screen_row(frame.world_x, frame.finish_line);
    if on_screen(finish_row) {
        vertices.extend(quad(
            Vec2::new(0.0, finish_row),
            BORDER_HALF_WIDTH,
            10.0,
            colors::FINISH_BAND,
        ));
        vertices.extend(quad(
            Vec2::new(-BORDER_HALF_WIDTH / 2.0, finish_row),
            BORDER_HALF_WIDTH / 2.0,
            10.0,
            colors::FINISH_GOLD,
        ));
    }

    // Items, obstacles under upgrades
    push_items(&mut vertices, frame.world_x, frame.obstacles);
    push_items(&mut vertices, frame.world_x, frame.upgrades);

    // Player avatar
    let half = frame.player.size / 2.0;
    vertices.extend(quad(
        Vec2::new(frame.player.x, PLAYER_ROW),
        half,
        half,
        colors::PLAYER,
    ));

    // Particles fade out with remaining life
    for particle in frame.particles.iter().take(settings.particle_cap()) {
        let mut color = item_color(particle.kind);
        color[3] = particle.life.clamp(0.0, 1.0);
        vertices.extend(circle(
            particle.pos,
            particle.size,
            color,
            CIRCLE_SEGMENTS / 2,
        ));
    }

    vertices
}
