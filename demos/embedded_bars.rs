//! Host-window demo: embeds the visualizer in a plain Win32 window and
//! animates the bars with a traveling sine wave.
//!
//! Run with `RUST_LOG=debug` to see surface lifecycle logging.

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use etmp_visualizer::{Visualizer, BAR_COUNT};
    use std::time::Instant;
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DefWindowProcW, DispatchMessageW, GetClientRect, PeekMessageW,
        PostQuitMessage, RegisterClassW, ShowWindow, TranslateMessage, CW_USEDEFAULT, MSG,
        PM_REMOVE, SW_SHOW, WINDOW_EX_STYLE, WM_DESTROY, WM_QUIT, WNDCLASSW, WS_OVERLAPPEDWINDOW,
    };

    unsafe extern "system" fn host_wnd_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        if msg == WM_DESTROY {
            PostQuitMessage(0);
            return LRESULT(0);
        }
        DefWindowProcW(hwnd, msg, wparam, lparam)
    }

    env_logger::init();

    let class_name: Vec<u16> = "EtmpVisualizerDemoHost\0".encode_utf16().collect();
    let title: Vec<u16> = "Bar Visualizer Demo\0".encode_utf16().collect();

    let hwnd = unsafe {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(host_wnd_proc),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };
        RegisterClassW(&wc);

        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            680,
            240,
            None,
            None,
            None,
            None,
        )?
    };

    let client = |hwnd: HWND| unsafe {
        let mut rect = Default::default();
        let _ = GetClientRect(hwnd, &mut rect);
        (
            (rect.right - rect.left).max(1) as u32,
            (rect.bottom - rect.top).max(1) as u32,
        )
    };

    let (mut width, mut height) = client(hwnd);
    let mut vis = Visualizer::create(hwnd.0 as isize, width, height)?;
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
    }

    let start = Instant::now();
    let mut values = [0.0f32; BAR_COUNT];
    let mut msg = MSG::default();

    'run: loop {
        unsafe {
            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                if msg.message == WM_QUIT {
                    break 'run;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        // Track host resizes by polling the client area; the embedded child
        // fills it exactly.
        let (w, h) = client(hwnd);
        if (w, h) != (width, height) {
            (width, height) = (w, h);
            vis.resize(width, height);
        }

        let t = start.elapsed().as_secs_f32();
        for (i, v) in values.iter_mut().enumerate() {
            let phase = t * 2.5 + i as f32 * 0.35;
            *v = 0.15 + 0.8 * phase.sin().abs();
        }
        vis.update_bars(&values);

        // Present blocks on vsync, which paces the loop.
        vis.render();
    }

    vis.destroy();
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("this demo requires Windows (it embeds a Win32 child window)");
}
