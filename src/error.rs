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

//! Errors.

use std::fmt;

use thiserror::Error;

/// An error reported by the graphics device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The device was lost; the render target and everything created from it
    /// must be destroyed and recreated.
    #[error("render target must be recreated")]
    RecreateTarget,
    /// Any other failure, carrying the native status code.
    #[error("hresult {status:x}")]
    Failed { status: i32 },
}

impl DeviceError {
    /// The native status code, as the process exit code should carry it.
    pub fn status(&self) -> i32 {
        match self {
            // D2DERR_RECREATE_TARGET
            DeviceError::RecreateTarget => 0x8899_000C_u32 as i32,
            DeviceError::Failed { status } => *status,
        }
    }
}

/// Which step of device resource creation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Factory,
    RenderTarget,
    BackgroundBrush,
    ForegroundBrush,
}

impl Stage {
    /// The native call that performs this step, used in error dialogs.
    pub fn call_name(self) -> &'static str {
        match self {
            Stage::Factory => "D2D1CreateFactory",
            Stage::RenderTarget => "CreateHwndRenderTarget",
            Stage::BackgroundBrush | Stage::ForegroundBrush => "CreateSolidColorBrush",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stage::Factory => "factory",
            Stage::RenderTarget => "render target",
            Stage::BackgroundBrush => "background brush",
            Stage::ForegroundBrush => "foreground brush",
        };
        f.write_str(name)
    }
}

/// Creating a device resource failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{} returned 0x{:x} !", .stage.call_name(), .source.status())]
pub struct DeviceCreationError {
    pub stage: Stage,
    #[source]
    pub source: DeviceError,
}

impl DeviceCreationError {
    pub fn new(stage: Stage, source: DeviceError) -> Self {
        DeviceCreationError { stage, source }
    }

    /// The native status code of the failed call.
    pub fn status(&self) -> i32 {
        self.source.status()
    }

    /// Whether the process must terminate after reporting this error.
    ///
    /// Only the factory and the background brush are fatal. A failed
    /// foreground brush is reported and execution continues with the
    /// resources that did get created.
    pub fn is_fatal(&self) -> bool {
        matches!(self.stage, Stage::Factory | Stage::BackgroundBrush)
    }
}

/// A failure of the windowing system while starting up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// A Win32 call failed; `code` is `GetLastError()`.
    #[error("{call} failed with error {code}")]
    LastError { call: &'static str, code: u32 },
    #[error(transparent)]
    Device(#[from] DeviceCreationError),
    #[error("this platform is not supported")]
    Unsupported,
}

impl PlatformError {
    /// The code the process should exit with.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlatformError::LastError { code, .. } => *code as i32,
            PlatformError::Device(e) => e.status(),
            PlatformError::Unsupported => 1,
        }
    }
}
