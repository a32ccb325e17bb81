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

//! Window creation options.

use std::time::Duration;

use kurbo::Rect;

/// Options for the application window.
///
/// ```
/// use quick_resize::WindowConfig;
/// use quick_resize::kurbo::Rect;
///
/// let config = WindowConfig::new()
///     .title("Quick resize")
///     .client_rect(Rect::new(100.0, 100.0, 900.0, 700.0));
/// assert_eq!(config.get_title(), "Quick resize");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    title: String,
    client_rect: Rect,
    class_prefix: String,
    idle_sleep: Duration,
}

impl WindowConfig {
    pub fn new() -> WindowConfig {
        WindowConfig {
            title: "Am I a window title?".into(),
            client_rect: Rect::new(50.0, 50.0, 640.0, 360.0),
            class_prefix: "quick-resize".into(),
            idle_sleep: Duration::from_millis(1),
        }
    }

    /// Set the window's title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the client rectangle the window is built around.
    ///
    /// The outer window is this rectangle grown by the platform's borders
    /// and title bar.
    pub fn client_rect(mut self, rect: Rect) -> Self {
        self.client_rect = rect;
        self
    }

    /// Set the prefix of the registered window class name.
    pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set how long the message loop sleeps once the queue is drained.
    pub fn idle_sleep(mut self, sleep: Duration) -> Self {
        self.idle_sleep = sleep;
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_client_rect(&self) -> Rect {
        self.client_rect
    }

    pub fn get_idle_sleep(&self) -> Duration {
        self.idle_sleep
    }

    /// A window class name unique to this process.
    pub fn class_name(&self) -> String {
        format!("{}-{}", self.class_prefix, std::process::id())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig::new()
    }
}
