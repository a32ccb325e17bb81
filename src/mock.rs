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

//! In-memory host and device used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use kurbo::Rect;

use crate::device::{Device, RenderTarget};
use crate::error::DeviceError;
use crate::geometry::{ClientSize, Color};
use crate::window::{DeferredOp, ShowCommand, WindowHost, WindowStyle};

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Begin,
    Clear(Color),
    DrawRect {
        rect: Rect,
        stroke_width: f32,
        color: Color,
        brush_generation: u64,
        target_generation: u64,
    },
    End,
}

#[derive(Default)]
struct GpuState {
    generation: Cell<u64>,
    live_targets: Cell<usize>,
    live_brushes: Cell<usize>,
    targets_created: Cell<usize>,
    target_failures: RefCell<VecDeque<DeviceError>>,
    brush_failures: RefCell<Vec<(Color, DeviceError)>>,
    end_draw_results: RefCell<VecDeque<DeviceError>>,
    resize_results: RefCell<VecDeque<DeviceError>>,
    commands: RefCell<Vec<Command>>,
    resizes: RefCell<Vec<ClientSize>>,
}

/// Shared bookkeeping of every mock resource, with scripted failures.
#[derive(Clone, Default)]
pub struct Gpu(Rc<GpuState>);

impl Gpu {
    pub fn new() -> Gpu {
        Gpu::default()
    }

    pub fn live_targets(&self) -> usize {
        self.0.live_targets.get()
    }

    pub fn live_brushes(&self) -> usize {
        self.0.live_brushes.get()
    }

    pub fn targets_created(&self) -> usize {
        self.0.targets_created.get()
    }

    /// Generation of the most recently created render target.
    pub fn generation(&self) -> u64 {
        self.0.generation.get()
    }

    pub fn fail_next_target(&self, err: DeviceError) {
        self.0.target_failures.borrow_mut().push_back(err);
    }

    /// Fail the next brush created with `color`.
    pub fn fail_brush(&self, color: Color, err: DeviceError) {
        self.0.brush_failures.borrow_mut().push((color, err));
    }

    pub fn fail_next_end_draw(&self, err: DeviceError) {
        self.0.end_draw_results.borrow_mut().push_back(err);
    }

    pub fn fail_next_resize(&self, err: DeviceError) {
        self.0.resize_results.borrow_mut().push_back(err);
    }

    pub fn take_commands(&self) -> Vec<Command> {
        std::mem::take(&mut *self.0.commands.borrow_mut())
    }

    pub fn resizes(&self) -> Vec<ClientSize> {
        self.0.resizes.borrow().clone()
    }
}

pub struct MockDevice {
    gpu: Gpu,
}

impl MockDevice {
    pub fn new(gpu: &Gpu) -> MockDevice {
        MockDevice { gpu: gpu.clone() }
    }
}

impl Device for MockDevice {
    type Target = MockTarget;

    fn create_render_target(&self, size: ClientSize) -> Result<MockTarget, DeviceError> {
        let state = &self.gpu.0;
        if let Some(err) = state.target_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        let generation = state.generation.get() + 1;
        state.generation.set(generation);
        state.live_targets.set(state.live_targets.get() + 1);
        state.targets_created.set(state.targets_created.get() + 1);
        Ok(MockTarget {
            gpu: self.gpu.clone(),
            generation,
            size,
        })
    }
}

pub struct MockTarget {
    gpu: Gpu,
    generation: u64,
    size: ClientSize,
}

impl MockTarget {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> ClientSize {
        self.size
    }

    fn record(&self, command: Command) {
        self.gpu.0.commands.borrow_mut().push(command);
    }
}

impl Drop for MockTarget {
    fn drop(&mut self) {
        let live = &self.gpu.0.live_targets;
        live.set(live.get() - 1);
    }
}

impl RenderTarget for MockTarget {
    type Brush = MockBrush;

    fn create_solid_brush(&mut self, color: Color) -> Result<MockBrush, DeviceError> {
        let state = &self.gpu.0;
        let mut failures = state.brush_failures.borrow_mut();
        if let Some(idx) = failures.iter().position(|(c, _)| *c == color) {
            return Err(failures.remove(idx).1);
        }
        state.live_brushes.set(state.live_brushes.get() + 1);
        Ok(MockBrush {
            gpu: self.gpu.clone(),
            generation: self.generation,
            color,
        })
    }

    fn resize(&mut self, size: ClientSize) -> Result<(), DeviceError> {
        self.gpu.0.resizes.borrow_mut().push(size);
        if let Some(err) = self.gpu.0.resize_results.borrow_mut().pop_front() {
            return Err(err);
        }
        self.size = size;
        Ok(())
    }

    fn begin_draw(&mut self) {
        self.record(Command::Begin);
    }

    fn clear(&mut self, color: Color) {
        self.record(Command::Clear(color));
    }

    fn draw_rect(&mut self, rect: Rect, brush: &MockBrush, stroke_width: f32) {
        self.record(Command::DrawRect {
            rect,
            stroke_width,
            color: brush.color,
            brush_generation: brush.generation,
            target_generation: self.generation,
        });
    }

    fn end_draw(&mut self) -> Result<(), DeviceError> {
        self.record(Command::End);
        match self.gpu.0.end_draw_results.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub struct MockBrush {
    gpu: Gpu,
    generation: u64,
    color: Color,
}

impl MockBrush {
    /// Generation of the render target that created this brush.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for MockBrush {
    fn drop(&mut self) {
        let live = &self.gpu.0.live_brushes;
        live.set(live.get() - 1);
    }
}

/// A host window that applies deferred operations to its own geometry.
#[derive(Clone)]
pub struct MockHost {
    client: Rc<Cell<ClientSize>>,
    window: Rc<Cell<Rect>>,
    screen: Rect,
    style: Rc<Cell<WindowStyle>>,
}

impl MockHost {
    pub fn new(client: ClientSize) -> MockHost {
        MockHost {
            client: Rc::new(Cell::new(client)),
            window: Rc::new(Cell::new(Rect::new(42.0, 19.0, 698.0, 418.0))),
            screen: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            style: Rc::new(Cell::new(WindowStyle::Overlapped)),
        }
    }

    pub fn set_client_size(&self, size: ClientSize) {
        self.client.set(size);
    }

    pub fn style(&self) -> WindowStyle {
        self.style.get()
    }

    /// Perform the window operations the way a window manager would.
    pub fn apply(&self, ops: &[DeferredOp]) {
        for op in ops {
            match op {
                DeferredOp::SetStyle(style) => self.style.set(*style),
                DeferredOp::Show(ShowCommand::Maximize) => self.window.set(self.screen),
                DeferredOp::SetPosition(rect) => self.window.set(*rect),
                _ => (),
            }
        }
    }
}

impl WindowHost for MockHost {
    fn client_size(&self) -> ClientSize {
        self.client.get()
    }

    fn window_rect(&self) -> Rect {
        self.window.get()
    }
}
