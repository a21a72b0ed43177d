//! Bar mesh generation.
//!
//! Pure mapping from a [`BarValueSet`](crate::bars::BarValueSet) snapshot to
//! a triangle-list vertex buffer in normalized device coordinates. Regenerated
//! wholesale every frame; never partially updated.

use crate::bars::BAR_COUNT;

/// Vertices per bar (two triangles forming a quad).
pub const VERTICES_PER_BAR: usize = 6;

/// Total vertex count produced for every frame.
pub const VERTEX_COUNT: usize = BAR_COUNT * VERTICES_PER_BAR;

/// Accent color applied to every vertex: cyan at 70% opacity (#00E0FF).
pub const ACCENT_COLOR: [f32; 4] = [0.0, 0.88, 1.0, 0.7];

/// NDC width of one bar slot.
const SLOT_WIDTH: f32 = 2.0 / BAR_COUNT as f32;

/// Fraction of the slot occupied by the bar; the rest is inter-bar spacing.
const BAR_FILL: f32 = 0.9;

/// Vertex data consumed by the bar pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Generate the full 192-vertex mesh for one frame.
///
/// Each bar is left-aligned within its slot and rises from the bottom edge
/// (y = -1) to `-1 + value * 2`, so a value of 1.0 spans the full surface
/// height. Values are passed through unclamped.
pub fn generate_bar_vertices(values: &[f32; BAR_COUNT]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(VERTEX_COUNT);
    let bar_width = SLOT_WIDTH * BAR_FILL;

    for (i, &value) in values.iter().enumerate() {
        let left = -1.0 + i as f32 * SLOT_WIDTH;
        let right = left + bar_width;
        let bottom = -1.0;
        let top = bottom + value * 2.0;

        let quad = [
            [left, bottom],
            [right, bottom],
            [left, top],
            [right, bottom],
            [right, top],
            [left, top],
        ];
        for [x, y] in quad {
            vertices.push(Vertex {
                position: [x, y, 0.0],
                color: ACCENT_COLOR,
            });
        }
    }

    vertices
}
