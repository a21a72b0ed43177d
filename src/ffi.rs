//! C ABI for hosts that load the visualizer as a native library.
//!
//! Each function maps one-to-one onto a [`Visualizer`] method. The handle
//! returned by [`visualizer_create`] is an opaque pointer owned by the host;
//! the host must call [`visualizer_destroy`] exactly once and must serialize
//! all calls on a single thread. Every function tolerates a null handle.

use crate::visualizer::Visualizer;

/// Create a visualizer embedded in `parent_hwnd`.
///
/// Returns an opaque handle, or null if window or GPU setup failed.
#[no_mangle]
pub extern "C" fn visualizer_create(
    parent_hwnd: isize,
    width: u32,
    height: u32,
) -> *mut Visualizer {
    match Visualizer::create(parent_hwnd, width, height) {
        Ok(vis) => Box::into_raw(Box::new(vis)),
        Err(err) => {
            log::error!("visualizer creation failed: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Overwrite the first `min(len, 32)` bar levels.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`visualizer_create`];
/// `values` must point to `len` readable f32s (or `len` must be 0).
#[no_mangle]
pub unsafe extern "C" fn visualizer_update_bars(
    handle: *mut Visualizer,
    values: *const f32,
    len: usize,
) {
    if handle.is_null() || values.is_null() {
        return;
    }
    let values = unsafe { std::slice::from_raw_parts(values, len) };
    unsafe { &mut *handle }.update_bars(values);
}

/// Render one frame and present it with vsync.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`visualizer_create`].
#[no_mangle]
pub unsafe extern "C" fn visualizer_render(handle: *mut Visualizer) {
    if handle.is_null() {
        return;
    }
    unsafe { &mut *handle }.render();
}

/// Resize the visualizer's child window and swap-chain.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`visualizer_create`].
#[no_mangle]
pub unsafe extern "C" fn visualizer_resize(handle: *mut Visualizer, width: u32, height: u32) {
    if handle.is_null() {
        return;
    }
    unsafe { &mut *handle }.resize(width, height);
}

/// Destroy the visualizer and free the handle.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`visualizer_create`]; it is
/// invalid after this call.
#[no_mangle]
pub unsafe extern "C" fn visualizer_destroy(handle: *mut Visualizer) {
    if handle.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(handle) });
}
