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

//! Various utilities for working with windows.

use std::ptr;

use winapi::shared::windef::RECT;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::winuser::{MessageBoxExW, MB_ICONERROR, MB_OK};
use wio::wide::ToWide;

use crate::error::PlatformError;

/// The error for a Win32 call that just failed.
pub(crate) fn last_error(call: &'static str) -> PlatformError {
    let code = unsafe { GetLastError() };
    PlatformError::LastError { call, code }
}

pub(crate) fn empty_rect() -> RECT {
    RECT {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    }
}

/// Show a blocking error dialog with no owner window.
pub(crate) fn show_error_message(caption: &str, message: &str) {
    let caption = caption.to_wide_null();
    let message = message.to_wide_null();
    unsafe {
        MessageBoxExW(
            ptr::null_mut(),
            message.as_ptr(),
            caption.as_ptr(),
            MB_OK | MB_ICONERROR,
            0,
        );
    }
}
