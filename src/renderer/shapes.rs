//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::rotate_point;

/// Generate vertices for a filled circle (triangle list)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
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

/// Closed outline through `points` as a line list
pub fn outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, &p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.push(Vertex::at(p, color));
        vertices.push(Vertex::at(next, color));
    }
    vertices
}

/// Corners of a regular polygon, first corner at `rotation_deg` from +x
pub fn polygon_points(center: Vec2, sides: u32, radius: f32, rotation_deg: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = rotation_deg.to_radians() + (i as f32 / sides as f32) * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Outline of a regular polygon (line list)
pub fn polygon_outline(
    center: Vec2,
    sides: u32,
    radius: f32,
    rotation_deg: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    outline(&polygon_points(center, sides, radius, rotation_deg), color)
}

/// Craft triangle: tip `size` ahead, base corners half a size behind and to the sides
pub fn craft_points(center: Vec2, size: f32, rotation_deg: f32) -> [Vec2; 3] {
    [
        Vec2::new(0.0, -size),
        Vec2::new(-size / 2.0, size / 2.0),
        Vec2::new(size / 2.0, size / 2.0),
    ]
    .map(|p| center + rotate_point(p, rotation_deg))
}

/// Outline of the craft triangle (line list)
pub fn craft_outline(center: Vec2, size: f32, rotation_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    outline(&craft_points(center, size, rotation_deg), color)
}
