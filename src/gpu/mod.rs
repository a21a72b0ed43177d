//! GPU rendering via wgpu.
//!
//! Provides device/queue initialization, the bar render pipeline, and the
//! presentable surface that owns the swap-chain for one embedded visualizer.

pub mod context;
pub mod pipeline;
pub mod surface;

pub use context::{GpuContext, GpuError};
pub use pipeline::BarPipeline;
pub use surface::RenderSurface;
