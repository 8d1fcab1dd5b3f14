//! Shape generation for 2D primitives
//!
//! All shapes are emitted in view space (x centered on the track, y growing
//! downward like the canvas); the pipeline maps view space to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled quad
pub fn quad(center: Vec2, half_w: f32, half_h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let x0 = center.x - half_w;
    let x1 = center.x + half_w;
    let y0 = center.y - half_h;
    let y1 = center.y + half_h;

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a rectangle outline of the given stroke thickness
pub fn rect_outline(
    center: Vec2,
    half_w: f32,
    half_h: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let t = thickness / 2.0;
    let mut vertices = Vec::with_capacity(24);

    // Top and bottom bars span the full width, side bars sit between them
    vertices.extend(quad(
        Vec2::new(center.x, center.y - half_h),
        half_w + t,
        t,
        color,
    ));
    vertices.extend(quad(
        Vec2::new(center.x, center.y + half_h),
        half_w + t,
        t,
        color,
    ));
    vertices.extend(quad(
        Vec2::new(center.x - half_w, center.y),
        t,
        half_h - t,
        color,
    ));
    vertices.extend(quad(
        Vec2::new(center.x + half_w, center.y),
        t,
        half_h - t,
        color,
    ));

    vertices
}
