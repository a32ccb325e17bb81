// Copyright 2024 The Quick Resize Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Creating and running the Win32 window.

use std::cell::RefCell;
use std::mem;
use std::ptr;
use std::thread;
use std::time::Duration;

use kurbo::Rect;
use tracing::{debug, info};
use winapi::shared::basetsd::LONG_PTR;
use winapi::shared::minwindef::{FALSE, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::{HWND, RECT};
use winapi::um::libloaderapi::GetModuleHandleW;
use winapi::um::winuser::{
    AdjustWindowRect, CreateWindowExW, DefWindowProcW, DispatchMessageW, GetClientRect,
    GetWindowLongPtrW, GetWindowRect, LoadCursorW, PeekMessageW, PostQuitMessage,
    RegisterClassExW, SetWindowLongPtrW, SetWindowPos, ShowWindow, TranslateMessage, CS_HREDRAW,
    CS_VREDRAW, GWL_STYLE, IDC_ARROW, MSG, PM_REMOVE, SWP_SHOWWINDOW, SW_MAXIMIZE, SW_RESTORE,
    SW_SHOWDEFAULT, WM_QUIT, WNDCLASSEXW, WS_OVERLAPPEDWINDOW, WS_POPUP,
};
use wio::wide::ToWide;

use super::d2d::D2dDevice;
use super::util::{empty_rect, last_error, show_error_message};
use crate::config::WindowConfig;
use crate::error::PlatformError;
use crate::geometry::{self, ClientSize};
use crate::msgs::Message;
use crate::registry::{dispatch, WindowRegistry};
use crate::window::{
    DeferredOp, ShowCommand, WindowHost, WindowState, WindowStyle, ERROR_CAPTION,
};

type Window = WindowState<HwndHost, D2dDevice>;

/// Extra window bytes offset holding the registry key.
const KEY_OFFSET: i32 = 0;

thread_local! {
    static WINDOWS: RefCell<WindowRegistry<Window>> = RefCell::new(WindowRegistry::new());
}

/// A native window handle, answering size queries.
#[derive(Clone, Copy, Debug)]
pub struct HwndHost(HWND);

impl WindowHost for HwndHost {
    fn client_size(&self) -> ClientSize {
        let mut rect = empty_rect();
        unsafe {
            GetClientRect(self.0, &mut rect);
        }
        ClientSize::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
    }

    fn window_rect(&self) -> Rect {
        let mut rect = empty_rect();
        unsafe {
            GetWindowRect(self.0, &mut rect);
        }
        geometry::window_rect(rect.left, rect.top, rect.right, rect.bottom)
    }
}

/// Open the window and pump messages until the window closes.
pub fn run(config: &WindowConfig) -> Result<(), PlatformError> {
    let class_name = register_class(config)?;
    let hwnd = create_window(config, &class_name)?;

    let device = D2dDevice::new(hwnd).map_err(|err| {
        show_error_message(ERROR_CAPTION, &err.to_string());
        err
    })?;
    let key = WINDOWS.with(|windows| {
        windows
            .borrow_mut()
            .insert(WindowState::new(HwndHost(hwnd), device))
    });
    unsafe {
        SetWindowLongPtrW(hwnd, KEY_OFFSET, key.to_raw());
    }
    info!(?key, "window registered");

    run_loop(config.get_idle_sleep());
    Ok(())
}

fn register_class(config: &WindowConfig) -> Result<Vec<u16>, PlatformError> {
    let class_name = config.class_name().to_wide_null();
    unsafe {
        let wnd = WNDCLASSEXW {
            cbSize: mem::size_of::<WNDCLASSEXW>() as UINT,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(window_proc),
            cbClsExtra: 0,
            cbWndExtra: mem::size_of::<LONG_PTR>() as i32,
            hInstance: GetModuleHandleW(ptr::null()),
            hIcon: ptr::null_mut(),
            hCursor: LoadCursorW(ptr::null_mut(), IDC_ARROW),
            hbrBackground: ptr::null_mut(),
            lpszMenuName: ptr::null(),
            lpszClassName: class_name.as_ptr(),
            hIconSm: ptr::null_mut(),
        };
        if RegisterClassExW(&wnd) == 0 {
            return Err(last_error("RegisterClassExW"));
        }
    }
    debug!(class = %config.class_name(), "registered window class");
    Ok(class_name)
}

fn create_window(config: &WindowConfig, class_name: &[u16]) -> Result<HWND, PlatformError> {
    let (left, top, right, bottom) = geometry::to_ltrb(config.get_client_rect());
    let mut rect = RECT {
        left,
        top,
        right,
        bottom,
    };
    let title = config.get_title().to_wide_null();
    unsafe {
        if AdjustWindowRect(&mut rect, WS_OVERLAPPEDWINDOW, FALSE) == 0 {
            return Err(last_error("AdjustWindowRect"));
        }
        let hwnd = CreateWindowExW(
            0,
            class_name.as_ptr(),
            title.as_ptr(),
            WS_OVERLAPPEDWINDOW,
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
            ptr::null_mut(),
            ptr::null_mut(),
            GetModuleHandleW(ptr::null()),
            ptr::null_mut(),
        );
        if hwnd.is_null() || hwnd as isize == -1 {
            return Err(last_error("CreateWindowExW"));
        }
        ShowWindow(hwnd, SW_SHOWDEFAULT);
        debug!(
            left = rect.left,
            top = rect.top,
            right = rect.right,
            bottom = rect.bottom,
            "created window"
        );
        Ok(hwnd)
    }
}

/// Drain the message queue, sleep, repeat, until `WM_QUIT`.
fn run_loop(idle_sleep: Duration) {
    unsafe {
        let mut msg: MSG = mem::zeroed();
        loop {
            while PeekMessageW(&mut msg, ptr::null_mut(), 0, 0, PM_REMOVE) != 0 {
                if msg.message == WM_QUIT {
                    return;
                }
                TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
            thread::sleep(idle_sleep);
        }
    }
}

/// The window procedure: find the window's state and forward.
unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: UINT,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let raw = GetWindowLongPtrW(hwnd, KEY_OFFSET);
    let message = Message::from_win32(msg, wparam);
    WINDOWS.with(|windows| {
        dispatch(
            windows,
            raw,
            &message,
            |op| perform(hwnd, op),
            || DefWindowProcW(hwnd, msg, wparam, lparam),
        )
    })
}

unsafe fn perform(hwnd: HWND, op: DeferredOp) {
    debug!(?op, "performing deferred op");
    match op {
        DeferredOp::SetStyle(style) => {
            let style = match style {
                WindowStyle::Overlapped => WS_OVERLAPPEDWINDOW,
                WindowStyle::Popup => WS_POPUP,
            };
            SetWindowLongPtrW(hwnd, GWL_STYLE, style as LONG_PTR);
        }
        DeferredOp::Show(cmd) => {
            let cmd = match cmd {
                ShowCommand::Maximize => SW_MAXIMIZE,
                ShowCommand::Restore => SW_RESTORE,
            };
            ShowWindow(hwnd, cmd);
        }
        DeferredOp::SetPosition(rect) => {
            let (x, y, width, height) = geometry::to_position(rect);
            SetWindowPos(hwnd, ptr::null_mut(), x, y, width, height, SWP_SHOWWINDOW);
        }
        DeferredOp::ShowError { caption, message } => show_error_message(caption, &message),
        DeferredOp::Quit(code) => PostQuitMessage(code),
        DeferredOp::Exit(code) => std::process::exit(code),
    }
}
