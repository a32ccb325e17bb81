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

//! Windows implementation: Win32 windows, Direct2D drawing.

mod d2d;
mod util;
mod window;

pub use window::run;

use winapi::shared::winerror::{D2DERR_RECREATE_TARGET, HRESULT, SUCCEEDED};

use crate::error::DeviceError;

/// Map an `HRESULT` onto the device error it stands for.
pub(crate) fn check_hr(hr: HRESULT) -> Result<(), DeviceError> {
    if SUCCEEDED(hr) {
        Ok(())
    } else if hr == D2DERR_RECREATE_TARGET {
        Err(DeviceError::RecreateTarget)
    } else {
        Err(DeviceError::Failed { status: hr })
    }
}
