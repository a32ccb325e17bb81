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

//! A single native window that draws two rectangles with a hardware
//! accelerated 2D API and toggles fullscreen on F11.
//!
//! The window logic is platform agnostic: a [`WindowState`] talks to the
//! windowing system through [`WindowHost`] and to the graphics device
//! through [`Device`]. The Windows backend supplies Win32 and Direct2D
//! implementations of both; tests supply mocks.

pub use keyboard_types;
pub use kurbo;

mod backend;
pub mod config;
pub mod device;
pub mod error;
pub mod geometry;
pub mod keyboard;
pub mod msgs;
pub mod registry;
pub mod window;

#[cfg(test)]
mod mock;

pub use backend::run;
pub use config::WindowConfig;
pub use device::{Device, DeviceResources, RenderTarget, Slot};
pub use error::{DeviceCreationError, DeviceError, PlatformError, Stage};
pub use geometry::{ClientSize, Color};
pub use keyboard::{KbKey, KeyEvent};
pub use msgs::Message;
pub use registry::{dispatch, WindowKey, WindowRegistry};
pub use window::{DeferredOp, ShowCommand, WindowHost, WindowState, WindowStyle};
