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

//! Platform specific implementations.

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        mod windows;
        pub use windows::run;
    } else {
        use crate::config::WindowConfig;
        use crate::error::PlatformError;

        /// Only Windows has a backend; everywhere else this reports so.
        pub fn run(_config: &WindowConfig) -> Result<(), PlatformError> {
            tracing::error!("quick-resize needs Win32 and Direct2D");
            Err(PlatformError::Unsupported)
        }
    }
}
