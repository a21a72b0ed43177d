//! Integration tests for the bar mesh contract through the public API.

use etmp_visualizer::{generate_bar_vertices, BarValueSet, ACCENT_COLOR, BAR_COUNT, VERTEX_COUNT};

#[test]
fn test_mesh_always_has_full_vertex_count() {
    for values in [[0.0; BAR_COUNT], [0.5; BAR_COUNT], [7.0; BAR_COUNT]] {
        assert_eq!(generate_bar_vertices(&values).len(), VERTEX_COUNT);
    }
}

#[test]
fn test_bars_fill_ninety_percent_of_their_slot() {
    let vertices = generate_bar_vertices(&[1.0; BAR_COUNT]);
    let slot_width = 2.0 / BAR_COUNT as f32;

    for bar in 0..BAR_COUNT {
        let quad = &vertices[bar * 6..(bar + 1) * 6];
        let left = quad
            .iter()
            .map(|v| v.position[0])
            .fold(f32::INFINITY, f32::min);
        let right = quad
            .iter()
            .map(|v| v.position[0])
            .fold(f32::NEG_INFINITY, f32::max);

        let slot_left = -1.0 + bar as f32 * slot_width;
        assert!((left - slot_left).abs() < 1e-6);
        assert!((right - left - slot_width * 0.9).abs() < 1e-6);
    }
}

#[test]
fn test_bar_height_maps_value_range_to_clip_space() {
    let mut values = [0.0; BAR_COUNT];
    values[3] = 0.5;
    values[7] = 1.0;
    let vertices = generate_bar_vertices(&values);

    let top = |bar: usize| {
        vertices[bar * 6..(bar + 1) * 6]
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max)
    };

    assert_eq!(top(0), -1.0);
    assert!((top(3) - 0.0).abs() < 1e-6);
    assert!((top(7) - 1.0).abs() < 1e-6);

    // Every bar is anchored to the bottom edge.
    for bar in 0..BAR_COUNT {
        let bottom = vertices[bar * 6..(bar + 1) * 6]
            .iter()
            .map(|v| v.position[1])
            .fold(f32::INFINITY, f32::min);
        assert_eq!(bottom, -1.0);
    }
}

#[test]
fn test_out_of_range_values_pass_through_unclamped() {
    let mut values = [0.0; BAR_COUNT];
    values[0] = 2.0;
    values[1] = -0.5;
    let vertices = generate_bar_vertices(&values);

    let top = |bar: usize| {
        vertices[bar * 6..(bar + 1) * 6]
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max)
    };

    assert!((top(0) - 3.0).abs() < 1e-6);
    assert!((top(1) - -2.0).abs() < 1e-6);
}

#[test]
fn test_every_vertex_carries_the_accent_color() {
    for vertex in generate_bar_vertices(&[0.4; BAR_COUNT]) {
        assert_eq!(vertex.color, ACCENT_COLOR);
        assert_eq!(vertex.position[2], 0.0);
    }
}

#[test]
fn test_value_set_feeds_the_mesh() {
    let mut bars = BarValueSet::new();

    // Fresh bars render at the 0.1 seed level, not flat.
    let seeded = generate_bar_vertices(bars.values());
    let top = seeded.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
    assert!((top - -0.8).abs() < 1e-6);

    bars.update(&[0.75; 8]);
    let vertices = generate_bar_vertices(bars.values());
    let top_of = |bar: usize| {
        vertices[bar * 6..(bar + 1) * 6]
            .iter()
            .map(|v| v.position[1])
            .fold(f32::NEG_INFINITY, f32::max)
    };
    assert!((top_of(7) - 0.5).abs() < 1e-6);
    assert!((top_of(8) - -0.8).abs() < 1e-6);
}
