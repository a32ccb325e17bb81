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

//! Per-window state and message handling.

use kurbo::Rect;
use tracing::{debug, error, warn};

use crate::device::{Device, DeviceResources, RenderTarget};
use crate::error::DeviceError;
use crate::geometry::{ClientSize, Color, STROKE_WIDTH};
use crate::msgs::Message;

/// Caption of every error dialog.
pub const ERROR_CAPTION: &str = "FATAL ERROR";

/// Read-only queries against the native window.
pub trait WindowHost {
    /// The current size of the client area.
    fn client_size(&self) -> ClientSize;

    /// The current outer window rectangle, in screen coordinates.
    fn window_rect(&self) -> Rect;
}

/// Frame style of the native window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStyle {
    /// Titled, bordered and resizable.
    Overlapped,
    /// Borderless.
    Popup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowCommand {
    Maximize,
    Restore,
}

/// A side effect on the native window or the process.
///
/// Changing window styles, showing dialogs and similar calls make the
/// windowing system send further messages to the window synchronously, so
/// the handlers only queue them; the backend performs them once the window
/// state is no longer borrowed, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DeferredOp {
    SetStyle(WindowStyle),
    Show(ShowCommand),
    /// Move and resize the window to exactly this rectangle, and show it.
    SetPosition(Rect),
    ShowError {
        caption: &'static str,
        message: String,
    },
    /// Ask the message loop to stop with this code.
    Quit(i32),
    /// Terminate the process immediately.
    Exit(i32),
}

/// Everything one window needs to draw itself.
pub struct WindowState<H: WindowHost, D: Device> {
    host: H,
    device: D,
    resources: DeviceResources<D>,
    size: ClientSize,
    /// Whether the first paint has created device resources.
    device_created: bool,
    fullscreen: bool,
    /// Window rectangle before entering fullscreen.
    saved_rect: Option<Rect>,
    /// Set once process termination has been queued.
    exiting: bool,
    deferred: Vec<DeferredOp>,
}

impl<H: WindowHost, D: Device> WindowState<H, D> {
    /// Wrap a window. Device resources are created lazily on first paint.
    pub fn new(host: H, device: D) -> Self {
        let size = host.client_size();
        WindowState {
            host,
            device,
            resources: DeviceResources::new(),
            size,
            device_created: false,
            fullscreen: false,
            saved_rect: None,
            exiting: false,
            deferred: Vec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn size(&self) -> ClientSize {
        self.size
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn resources(&self) -> &DeviceResources<D> {
        &self.resources
    }

    /// Take the operations queued by the handlers so far.
    pub fn take_deferred(&mut self) -> Vec<DeferredOp> {
        std::mem::take(&mut self.deferred)
    }

    /// React to one window message.
    ///
    /// The caller still owes the message to the platform's default handler,
    /// whatever happens here.
    pub fn handle_message(&mut self, message: &Message) {
        if self.exiting {
            return;
        }
        match message {
            Message::Paint => self.on_paint(),
            Message::Size => self.on_resize(),
            Message::Close => {
                debug!("close requested, exiting");
                self.defer(DeferredOp::Quit(0));
                self.exit(0);
            }
            Message::KeyUp(event) if event.is_fullscreen_toggle() => self.on_toggle_fullscreen(),
            Message::KeyUp(_) | Message::Other(_) => (),
        }
    }

    /// Draw a frame, creating device resources on the first call.
    pub fn on_paint(&mut self) {
        if !self.device_created {
            self.device_created = true;
            self.create_device_resources();
            if self.exiting {
                return;
            }
        }

        let size = self.size;
        let Some((target, foreground)) = self.resources.target_and_foreground() else {
            warn!("no render target, skipping paint");
            return;
        };

        target.begin_draw();
        target.clear(Color::BACKGROUND);
        match foreground {
            Some(brush) => {
                target.draw_rect(size.outer_rect(), brush, STROKE_WIDTH);
                target.draw_rect(size.inner_rect(), brush, STROKE_WIDTH);
            }
            None => warn!("no foreground brush, skipping rectangles"),
        }
        match target.end_draw() {
            Ok(()) => (),
            Err(DeviceError::RecreateTarget) => {
                debug!("render target lost at end of frame");
                self.create_device_resources();
            }
            Err(err) => warn!("EndDraw failed: {}", err),
        }
    }

    /// Track a new client size.
    pub fn on_resize(&mut self) {
        let size = self.host.client_size();
        self.size = size;
        let Some(target) = self.resources.target_mut() else {
            debug!(?size, "resized before device resources exist");
            return;
        };
        match target.resize(size) {
            Ok(()) => (),
            Err(DeviceError::RecreateTarget) => {
                debug!("render target lost on resize");
                self.create_device_resources();
            }
            // a minimized window reports 0x0, which some devices refuse
            Err(err) => debug!(?size, "ignoring resize failure: {}", err),
        }
    }

    /// Switch between windowed and fullscreen.
    pub fn on_toggle_fullscreen(&mut self) {
        if self.fullscreen {
            self.defer(DeferredOp::SetStyle(WindowStyle::Overlapped));
            self.defer(DeferredOp::Show(ShowCommand::Restore));
            match self.saved_rect.take() {
                Some(rect) => self.defer(DeferredOp::SetPosition(rect)),
                None => warn!("leaving fullscreen without a saved window rectangle"),
            }
        } else {
            self.saved_rect = Some(self.host.window_rect());
            self.defer(DeferredOp::SetStyle(WindowStyle::Popup));
            self.defer(DeferredOp::Show(ShowCommand::Maximize));
        }
        self.fullscreen = !self.fullscreen;
        debug!(fullscreen = self.fullscreen, "toggled fullscreen");
    }

    /// Release and recreate the render target and brushes at the current
    /// client size, reporting failures.
    fn create_device_resources(&mut self) {
        self.size = self.host.client_size();
        if let Err(err) = self.resources.create(&self.device, self.size) {
            error!(stage = %err.stage, "{}", err);
            self.defer(DeferredOp::ShowError {
                caption: ERROR_CAPTION,
                message: err.to_string(),
            });
            if err.is_fatal() {
                self.exit(err.status());
            }
        }
    }

    fn exit(&mut self, code: i32) {
        self.exiting = true;
        self.defer(DeferredOp::Exit(code));
    }

    fn defer(&mut self, op: DeferredOp) {
        self.deferred.push(op);
    }
}

impl<H: WindowHost, D: Device> Drop for WindowState<H, D> {
    fn drop(&mut self) {
        self.resources.release();
    }
}
