//! Native child-window adapter (Windows).
//!
//! Creates the child window that hosts the swap-chain inside the host
//! application's window, and forwards `WM_SIZE` notifications through an
//! explicit event channel. The visualizer drains that channel and applies
//! the latest size synchronously before rendering, so a frame always
//! observes either the old or the fully-updated dimensions.

use raw_window_handle::{
    RawDisplayHandle, RawWindowHandle, Win32WindowHandle, WindowsDisplayHandle,
};
use std::num::NonZeroIsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetClientRect, GetWindowLongPtrW,
    RegisterClassW, SetWindowLongPtrW, SetWindowPos, GWLP_USERDATA, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOZORDER, WINDOW_EX_STYLE, WM_SIZE, WNDCLASSW, WS_CHILD, WS_VISIBLE,
};

const CLASS_NAME: &str = "EtmpVisualizerSurface\0";

/// Errors from native window operations.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to create child window: {0}")]
    CreateFailed(String),
    #[error("Window handle is not valid")]
    InvalidHandle,
}

/// Child window embedded in the host window.
///
/// Owns the HWND and the resize event channel fed by the window procedure.
/// Not `Send`: all operations belong on the host's UI thread.
pub struct EmbeddedWindow {
    hwnd: isize,
    resize_rx: Receiver<(u32, u32)>,
    // Leaked into GWLP_USERDATA for the window procedure; reclaimed in destroy.
    resize_tx: *mut Sender<(u32, u32)>,
}

impl EmbeddedWindow {
    /// Create a visible child window of the requested size inside `parent_hwnd`.
    pub fn create(parent_hwnd: isize, width: u32, height: u32) -> Result<Self, WindowError> {
        unsafe {
            // Register window class (only once per process)
            static CLASS_REGISTERED: AtomicBool = AtomicBool::new(false);
            let class_name: Vec<u16> = CLASS_NAME.encode_utf16().collect();
            if !CLASS_REGISTERED.swap(true, Ordering::SeqCst) {
                let wc = WNDCLASSW {
                    lpfnWndProc: Some(visualizer_wnd_proc),
                    lpszClassName: PCWSTR(class_name.as_ptr()),
                    ..Default::default()
                };
                RegisterClassW(&wc);
            }

            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                PCWSTR(class_name.as_ptr()),
                PCWSTR::null(),
                WS_CHILD | WS_VISIBLE,
                0,
                0,
                width as i32,
                height as i32,
                HWND(parent_hwnd as *mut _),
                None,
                None,
                None,
            )
            .map_err(|e| WindowError::CreateFailed(e.to_string()))?;

            let (tx, rx) = mpsc::channel();
            let resize_tx = Box::into_raw(Box::new(tx));
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, resize_tx as isize);

            log::info!("visualizer child window created: {}x{}", width, height);

            Ok(Self {
                hwnd: hwnd.0 as isize,
                resize_rx: rx,
                resize_tx,
            })
        }
    }

    /// The native handle of the child window.
    pub fn hwnd(&self) -> isize {
        self.hwnd
    }

    /// Surface target for wgpu, valid as long as this window is alive.
    pub fn surface_target(&self) -> Result<wgpu::SurfaceTargetUnsafe, WindowError> {
        let handle = Win32WindowHandle::new(
            NonZeroIsize::new(self.hwnd).ok_or(WindowError::InvalidHandle)?,
        );
        Ok(wgpu::SurfaceTargetUnsafe::RawHandle {
            raw_display_handle: RawDisplayHandle::Windows(WindowsDisplayHandle::new()),
            raw_window_handle: RawWindowHandle::Win32(handle),
        })
    }

    /// Resize the native window. The resulting `WM_SIZE` lands in the resize
    /// channel; [`Self::take_pending_resize`] surfaces it to the caller.
    pub fn resize(&self, width: u32, height: u32) {
        if self.hwnd == 0 {
            return;
        }
        unsafe {
            let _ = SetWindowPos(
                HWND(self.hwnd as *mut _),
                None,
                0,
                0,
                width as i32,
                height as i32,
                SWP_NOMOVE | SWP_NOZORDER | SWP_NOACTIVATE,
            );
        }
    }

    /// Drain queued resize notifications, returning only the most recent one.
    pub fn take_pending_resize(&self) -> Option<(u32, u32)> {
        latest_resize(&self.resize_rx)
    }

    /// Current client-area size in pixels.
    pub fn client_size(&self) -> (u32, u32) {
        if self.hwnd == 0 {
            return (0, 0);
        }
        unsafe {
            let mut rect = RECT::default();
            if GetClientRect(HWND(self.hwnd as *mut _), &mut rect).is_ok() {
                (
                    (rect.right - rect.left).max(0) as u32,
                    (rect.bottom - rect.top).max(0) as u32,
                )
            } else {
                (0, 0)
            }
        }
    }

    /// Destroy the native window. Idempotent; GPU resources referencing the
    /// window must already be gone.
    pub fn destroy(&mut self) {
        if self.hwnd == 0 {
            return;
        }
        unsafe {
            let hwnd = HWND(self.hwnd as *mut _);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            let _ = DestroyWindow(hwnd);
            drop(Box::from_raw(self.resize_tx));
        }
        self.hwnd = 0;
        self.resize_tx = std::ptr::null_mut();
        log::info!("visualizer child window destroyed");
    }
}

impl Drop for EmbeddedWindow {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Latest entry in a resize channel, discarding anything older. A burst of
/// `WM_SIZE` notifications collapses into one reconfiguration.
fn latest_resize(rx: &Receiver<(u32, u32)>) -> Option<(u32, u32)> {
    let mut latest = None;
    while let Ok(size) = rx.try_recv() {
        latest = Some(size);
    }
    latest
}

/// Window procedure for the child window: forwards resize notifications into
/// the channel, defers everything else.
unsafe extern "system" fn visualizer_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_SIZE {
        let user_data = GetWindowLongPtrW(hwnd, GWLP_USERDATA);
        if user_data != 0 {
            let sender = &*(user_data as *const Sender<(u32, u32)>);
            let width = (lparam.0 as u32) & 0xFFFF;
            let height = ((lparam.0 as u32) >> 16) & 0xFFFF;
            let _ = sender.send((width, height));
        }
        return LRESULT(0);
    }
    DefWindowProcW(hwnd, msg, wparam, lparam)
}
