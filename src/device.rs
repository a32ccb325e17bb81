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

//! Device-bound drawing resources and their lifecycle.
//!
//! A [`Device`] creates a [`RenderTarget`] bound to one window; the render
//! target in turn creates brushes. Both can be invalidated by the device at
//! any time, which is reported as [`DeviceError::RecreateTarget`], after which
//! everything must be released and created again. [`DeviceResources`] owns
//! that set for one window.

use kurbo::Rect;
use tracing::debug;

use crate::error::{DeviceCreationError, DeviceError, Stage};
use crate::geometry::{ClientSize, Color};

/// Something that can create render targets for a single window.
pub trait Device {
    type Target: RenderTarget;

    /// Create a render target bound to the window, sized to `size`.
    fn create_render_target(&self, size: ClientSize) -> Result<Self::Target, DeviceError>;
}

/// A device-bound surface that receives draw commands.
///
/// Dropping a render target or a brush releases it.
pub trait RenderTarget {
    type Brush;

    fn create_solid_brush(&mut self, color: Color) -> Result<Self::Brush, DeviceError>;

    /// Resize the surface to a new client size.
    fn resize(&mut self, size: ClientSize) -> Result<(), DeviceError>;

    fn begin_draw(&mut self);

    fn clear(&mut self, color: Color);

    /// Stroke the outline of `rect`.
    fn draw_rect(&mut self, rect: Rect, brush: &Self::Brush, stroke_width: f32);

    /// Finish the batch started by [`begin_draw`](RenderTarget::begin_draw)
    /// and present it.
    fn end_draw(&mut self) -> Result<(), DeviceError>;
}

/// The brush type of a device's render targets.
pub type BrushOf<D> = <<D as Device>::Target as RenderTarget>::Brush;

/// An owned device resource that is always released before it is replaced.
#[derive(Debug)]
pub struct Slot<T>(Option<T>);

impl<T> Slot<T> {
    pub const fn empty() -> Self {
        Slot(None)
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    pub fn is_live(&self) -> bool {
        self.0.is_some()
    }

    /// Release the held resource, if any. Returns whether anything was held.
    pub fn release(&mut self) -> bool {
        // dropping the value releases it
        self.0.take().is_some()
    }

    /// Release the held resource, then store whatever `create` produces.
    ///
    /// The slot stays empty when `create` fails.
    pub fn acquire<E>(&mut self, create: impl FnOnce() -> Result<T, E>) -> Result<&mut T, E> {
        self.release();
        let value = create()?;
        Ok(self.0.insert(value))
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::empty()
    }
}

/// The render target and brushes of one window.
///
/// Either all three are live or all three are released, with one exception:
/// when the foreground brush cannot be created the target and background
/// brush stay live (see [`DeviceCreationError::is_fatal`]).
pub struct DeviceResources<D: Device> {
    target: Slot<D::Target>,
    background: Slot<BrushOf<D>>,
    foreground: Slot<BrushOf<D>>,
}

impl<D: Device> DeviceResources<D> {
    pub fn new() -> Self {
        DeviceResources {
            target: Slot::empty(),
            background: Slot::empty(),
            foreground: Slot::empty(),
        }
    }

    /// Release everything and create a fresh render target and brushes.
    ///
    /// Creation stops at the first failure; whatever was created before it
    /// stays live.
    pub fn create(&mut self, device: &D, size: ClientSize) -> Result<(), DeviceCreationError> {
        self.release();
        debug!(width = size.width, height = size.height, "creating device resources");

        let target = self
            .target
            .acquire(|| device.create_render_target(size))
            .map_err(|e| DeviceCreationError::new(Stage::RenderTarget, e))?;
        self.background
            .acquire(|| target.create_solid_brush(Color::BACKGROUND))
            .map_err(|e| DeviceCreationError::new(Stage::BackgroundBrush, e))?;
        self.foreground
            .acquire(|| target.create_solid_brush(Color::FOREGROUND))
            .map_err(|e| DeviceCreationError::new(Stage::ForegroundBrush, e))?;
        Ok(())
    }

    /// Release all resources. Releasing nothing is a no-op.
    pub fn release(&mut self) {
        let released = self.foreground.release()
            | self.background.release()
            | self.target.release();
        if released {
            debug!("released device resources");
        }
    }

    pub fn has_target(&self) -> bool {
        self.target.is_live()
    }

    /// Whether the render target and both brushes are live.
    pub fn is_complete(&self) -> bool {
        self.target.is_live() && self.background.is_live() && self.foreground.is_live()
    }

    pub fn target_mut(&mut self) -> Option<&mut D::Target> {
        self.target.get_mut()
    }

    /// The render target together with the brush used for outlines.
    pub fn target_and_foreground(&mut self) -> Option<(&mut D::Target, Option<&BrushOf<D>>)> {
        let target = self.target.get_mut()?;
        Some((target, self.foreground.get()))
    }
}

impl<D: Device> Default for DeviceResources<D> {
    fn default() -> Self {
        DeviceResources::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Gpu, MockDevice};

    const SIZE: ClientSize = ClientSize::new(640, 360);

    #[test]
    fn slot_releases_before_reassignment() {
        let gpu = Gpu::new();
        let device = MockDevice::new(&gpu);
        let mut slot = Slot::empty();
        slot.acquire(|| device.create_render_target(SIZE)).unwrap();
        assert_eq!(gpu.live_targets(), 1);
        slot.acquire(|| {
            // the old target is already gone when the new one is created
            assert_eq!(gpu.live_targets(), 0);
            device.create_render_target(SIZE)
        })
        .unwrap();
        assert_eq!(gpu.live_targets(), 1);
    }

    #[test]
    fn release_of_nothing_is_a_no_op() {
        let mut slot: Slot<u32> = Slot::empty();
        assert!(!slot.release());
        assert!(!slot.release());
        let mut resources = DeviceResources::<MockDevice>::new();
        resources.release();
        assert!(!resources.has_target());
    }

    #[test]
    fn create_produces_a_complete_set() {
        let gpu = Gpu::new();
        let device = MockDevice::new(&gpu);
        let mut resources = DeviceResources::new();
        resources.create(&device, SIZE).unwrap();
        assert!(resources.is_complete());
        assert_eq!(gpu.live_targets(), 1);
        assert_eq!(gpu.live_brushes(), 2);
        assert_eq!(resources.target_mut().unwrap().size(), SIZE);
    }

    #[test]
    fn recreate_replaces_every_resource() {
        let gpu = Gpu::new();
        let device = MockDevice::new(&gpu);
        let mut resources = DeviceResources::new();
        resources.create(&device, SIZE).unwrap();
        let first = resources.target_mut().unwrap().generation();
        resources.create(&device, SIZE).unwrap();
        let (target, brush) = resources.target_and_foreground().unwrap();
        assert_ne!(target.generation(), first);
        assert_eq!(brush.unwrap().generation(), target.generation());
        assert_eq!(gpu.live_targets(), 1);
        assert_eq!(gpu.live_brushes(), 2);
    }

    #[test]
    fn failed_target_leaves_nothing_live() {
        let gpu = Gpu::new();
        let device = MockDevice::new(&gpu);
        let mut resources = DeviceResources::new();
        resources.create(&device, SIZE).unwrap();
        gpu.fail_next_target(DeviceError::Failed { status: -7 });
        let err = resources.create(&device, SIZE).unwrap_err();
        assert_eq!(err.stage, Stage::RenderTarget);
        assert!(!err.is_fatal());
        assert!(!resources.has_target());
        assert_eq!(gpu.live_targets(), 0);
        assert_eq!(gpu.live_brushes(), 0);
    }

    #[test]
    fn failed_background_brush_is_fatal() {
        let gpu = Gpu::new();
        let device = MockDevice::new(&gpu);
        let mut resources = DeviceResources::new();
        gpu.fail_brush(Color::BACKGROUND, DeviceError::Failed { status: -3 });
        let err = resources.create(&device, SIZE).unwrap_err();
        assert_eq!(err.stage, Stage::BackgroundBrush);
        assert_eq!(err.status(), -3);
        assert!(err.is_fatal());
    }

    #[test]
    fn failed_foreground_brush_keeps_partial_set() {
        let gpu = Gpu::new();
        let device = MockDevice::new(&gpu);
        let mut resources = DeviceResources::new();
        gpu.fail_brush(Color::FOREGROUND, DeviceError::Failed { status: -4 });
        let err = resources.create(&device, SIZE).unwrap_err();
        assert_eq!(err.stage, Stage::ForegroundBrush);
        assert!(!err.is_fatal());
        assert!(resources.has_target());
        assert!(!resources.is_complete());
        let (_, brush) = resources.target_and_foreground().unwrap();
        assert!(brush.is_none());
        assert_eq!(gpu.live_brushes(), 1);
    }
}
