//! End-to-end lifecycle tests against a real host window (Windows only).
//!
//! These need a desktop session and a working adapter; without either they
//! log and skip rather than fail.

#![cfg(windows)]

use etmp_visualizer::Visualizer;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, RegisterClassW, CW_USEDEFAULT,
    WINDOW_EX_STYLE, WNDCLASSW, WS_OVERLAPPEDWINDOW,
};

unsafe extern "system" fn host_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    DefWindowProcW(hwnd, msg, wparam, lparam)
}

/// Hidden top-level window standing in for the host application.
fn host_window() -> Option<HWND> {
    unsafe {
        let class_name: Vec<u16> = "EtmpVisualizerTestHost\0".encode_utf16().collect();
        let wc = WNDCLASSW {
            lpfnWndProc: Some(host_wnd_proc),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };
        RegisterClassW(&wc);

        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR::null(),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            640,
            480,
            None,
            None,
            None,
            None,
        )
        .ok()
    }
}

#[test]
fn test_lifecycle_create_render_resize_destroy() {
    let Some(host) = host_window() else {
        eprintln!("skipping lifecycle test, no desktop session");
        return;
    };

    let mut vis = match Visualizer::create(host.0 as isize, 200, 50) {
        Ok(vis) => vis,
        Err(err) => {
            eprintln!("skipping lifecycle test, no usable GPU: {err}");
            unsafe {
                let _ = DestroyWindow(host);
            }
            return;
        }
    };

    assert_eq!(vis.dimensions(), Some((200, 50)));
    assert!(vis.is_presentable());
    vis.update_bars(&[0.5; 32]);
    vis.render();
    assert!(vis.is_presentable());

    // The new size is observable before the next frame, no message-loop
    // round trip required.
    vis.resize(400, 100);
    assert_eq!(vis.dimensions(), Some((400, 100)));
    vis.render();
    assert!(vis.is_presentable());

    vis.destroy();
    vis.destroy();
    vis.render();
    assert_eq!(vis.dimensions(), None);

    unsafe {
        let _ = DestroyWindow(host);
    }
}
