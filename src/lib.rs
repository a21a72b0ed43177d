//! ETMP Visualizer Core
//!
//! GPU-accelerated bar visualizer that renders into a child window embedded
//! in a host application (e.g. a media player's now-playing panel).
//!
//! # Features
//!
//! - 32-bar level visualization rendered as a triangle mesh
//! - GPU rendering via wgpu, presented with vsync into a native surface
//! - Win32 child-window embedding with resize forwarding (Windows)
//! - Surface-target embedding for hosts that own their window (all platforms)
//! - C ABI entry points for non-Rust hosts (when built as a cdylib)
//!
//! The host drives everything: it calls [`Visualizer::update_bars`] with the
//! latest levels and [`Visualizer::render`] once per frame. The vsync-blocking
//! present inside `render` is the only frame pacing in the system.

pub mod bars;
pub mod geometry;
pub mod gpu;
pub mod visualizer;

#[cfg(windows)]
pub mod ffi;
#[cfg(windows)]
pub mod window;

// Re-export commonly used types
pub use bars::{BarValueSet, BAR_COUNT};
pub use geometry::{generate_bar_vertices, Vertex, ACCENT_COLOR, VERTEX_COUNT};
pub use gpu::{BarPipeline, GpuContext, GpuError, RenderSurface};
pub use visualizer::{Visualizer, VisualizerError};

#[cfg(windows)]
pub use window::{EmbeddedWindow, WindowError};
