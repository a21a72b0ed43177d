//! Public control surface for one visualizer instance.
//!
//! The host owns a [`Visualizer`] and drives it from a single thread: update
//! the bar levels, render a frame, resize, destroy. All methods take `&mut
//! self`, so the borrow checker enforces the serialized-call contract the
//! original design left to convention.

use crate::bars::{BarValueSet, BAR_COUNT};
use crate::gpu::{GpuError, RenderSurface};

#[cfg(windows)]
use crate::window::{EmbeddedWindow, WindowError};

/// Errors that can occur while creating a visualizer.
#[derive(Debug, thiserror::Error)]
pub enum VisualizerError {
    #[cfg(windows)]
    #[error("Window error: {0}")]
    Window(#[from] WindowError),
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}

/// One embedded bar visualizer.
///
/// Each instance owns its child window (when created via [`create`]) and its
/// GPU state; multiple instances may coexist in one process. After
/// [`destroy`] (or a fatal device error) every operation is a silent no-op.
///
/// [`create`]: Visualizer::create
/// [`destroy`]: Visualizer::destroy
pub struct Visualizer {
    bars: BarValueSet,
    surface: Option<RenderSurface>,
    #[cfg(windows)]
    window: Option<EmbeddedWindow>,
}

impl Visualizer {
    /// Create a visualizer embedded in the host window `parent_hwnd`.
    ///
    /// Composes child-window creation and GPU initialization. If the GPU side
    /// fails, the just-created window is destroyed before returning the
    /// error; no partial state is retained.
    #[cfg(windows)]
    pub fn create(parent_hwnd: isize, width: u32, height: u32) -> Result<Self, VisualizerError> {
        let mut window = EmbeddedWindow::create(parent_hwnd, width, height)?;
        let target = window.surface_target()?;

        // SAFETY: `window` owns the handle behind `target` and is stored
        // alongside the surface; teardown releases the surface first.
        let surface = match pollster::block_on(unsafe {
            RenderSurface::new(target, width, height)
        }) {
            Ok(surface) => surface,
            Err(err) => {
                window.destroy();
                return Err(err.into());
            }
        };

        Ok(Self {
            bars: BarValueSet::new(),
            surface: Some(surface),
            window: Some(window),
        })
    }

    /// Create a visualizer over a surface target the host already owns
    /// (no child window is created or managed).
    ///
    /// # Safety
    ///
    /// The window behind `target` must be valid and outlive this visualizer.
    pub unsafe fn from_surface_target(
        target: wgpu::SurfaceTargetUnsafe,
        width: u32,
        height: u32,
    ) -> Result<Self, VisualizerError> {
        let surface = pollster::block_on(unsafe { RenderSurface::new(target, width, height) })?;
        Ok(Self {
            bars: BarValueSet::new(),
            surface: Some(surface),
            #[cfg(windows)]
            window: None,
        })
    }

    /// Overwrite the first `min(values.len(), 32)` bar levels.
    pub fn update_bars(&mut self, values: &[f32]) {
        self.bars.update(values);
    }

    /// Current bar levels.
    pub fn bar_values(&self) -> &[f32; BAR_COUNT] {
        self.bars.values()
    }

    /// Render one frame and present it with vsync.
    ///
    /// Applies any pending window resize first, so the frame observes either
    /// the old or the fully-updated dimensions. Silently no-ops when the
    /// visualizer is destroyed or degraded.
    pub fn render(&mut self) {
        #[cfg(windows)]
        if let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) {
            if let Some((width, height)) = window.take_pending_resize() {
                surface.resize(width, height);
            }
        }

        if let Some(surface) = self.surface.as_mut() {
            surface.render_frame(self.bars.values());
        }
    }

    /// Resize the visualizer to the new client-area size.
    ///
    /// Resizes the native window (when one is owned) and reconfigures the
    /// swap-chain synchronously; the `WM_SIZE` round trip is not required
    /// for the new size to take effect.
    pub fn resize(&mut self, width: u32, height: u32) {
        #[cfg(windows)]
        if let Some(window) = self.window.as_ref() {
            window.resize(width, height);
        }

        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
    }

    /// Swap-chain dimensions, while the visualizer is renderable.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(RenderSurface::dimensions)
    }

    /// Whether frames can currently be presented.
    pub fn is_presentable(&self) -> bool {
        self.surface
            .as_ref()
            .is_some_and(RenderSurface::is_presentable)
    }

    /// Tear down GPU state, then the native window. Idempotent.
    pub fn destroy(&mut self) {
        // GPU resources must not outlive the window they present into.
        self.surface = None;

        #[cfg(windows)]
        if let Some(mut window) = self.window.take() {
            window.destroy();
        }
    }
}

impl Drop for Visualizer {
    fn drop(&mut self) {
        self.destroy();
    }
}
