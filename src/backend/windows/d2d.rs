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

//! Direct2D render targets bound to a window.

use std::ptr;

use kurbo::Rect;
use winapi::shared::dxgiformat::DXGI_FORMAT_UNKNOWN;
use winapi::shared::windef::HWND;
use winapi::um::d2d1::{
    D2D1CreateFactory, ID2D1Brush, ID2D1Factory, ID2D1HwndRenderTarget, ID2D1SolidColorBrush,
    D2D1_COLOR_F, D2D1_FACTORY_TYPE_MULTI_THREADED, D2D1_FEATURE_LEVEL_DEFAULT,
    D2D1_HWND_RENDER_TARGET_PROPERTIES, D2D1_PRESENT_OPTIONS_RETAIN_CONTENTS, D2D1_RECT_F,
    D2D1_RENDER_TARGET_PROPERTIES, D2D1_RENDER_TARGET_TYPE_DEFAULT,
    D2D1_RENDER_TARGET_USAGE_NONE, D2D1_SIZE_U,
};
use winapi::um::dcommon::{D2D1_ALPHA_MODE_UNKNOWN, D2D1_PIXEL_FORMAT};
use winapi::Interface;
use wio::com::ComPtr;

use super::check_hr;
use crate::device::{Device, RenderTarget};
use crate::error::{DeviceCreationError, DeviceError, Stage};
use crate::geometry::{ClientSize, Color};

/// A Direct2D factory producing render targets for one window.
pub struct D2dDevice {
    factory: ComPtr<ID2D1Factory>,
    hwnd: HWND,
}

impl D2dDevice {
    pub fn new(hwnd: HWND) -> Result<D2dDevice, DeviceCreationError> {
        let mut factory: *mut ID2D1Factory = ptr::null_mut();
        let hr = unsafe {
            D2D1CreateFactory(
                D2D1_FACTORY_TYPE_MULTI_THREADED,
                &ID2D1Factory::uuidof(),
                ptr::null(),
                &mut factory as *mut *mut ID2D1Factory as *mut _,
            )
        };
        check_hr(hr).map_err(|e| DeviceCreationError::new(Stage::Factory, e))?;
        Ok(D2dDevice {
            factory: unsafe { ComPtr::from_raw(factory) },
            hwnd,
        })
    }
}

impl Device for D2dDevice {
    type Target = HwndRenderTarget;

    fn create_render_target(&self, size: ClientSize) -> Result<HwndRenderTarget, DeviceError> {
        let props = D2D1_RENDER_TARGET_PROPERTIES {
            _type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
            pixelFormat: D2D1_PIXEL_FORMAT {
                format: DXGI_FORMAT_UNKNOWN,
                alphaMode: D2D1_ALPHA_MODE_UNKNOWN,
            },
            dpiX: 0.0,
            dpiY: 0.0,
            usage: D2D1_RENDER_TARGET_USAGE_NONE,
            minLevel: D2D1_FEATURE_LEVEL_DEFAULT,
        };
        let hwnd_props = D2D1_HWND_RENDER_TARGET_PROPERTIES {
            hwnd: self.hwnd,
            pixelSize: size_u(size),
            presentOptions: D2D1_PRESENT_OPTIONS_RETAIN_CONTENTS,
        };
        let mut target: *mut ID2D1HwndRenderTarget = ptr::null_mut();
        unsafe {
            check_hr(
                self.factory
                    .CreateHwndRenderTarget(&props, &hwnd_props, &mut target),
            )?;
            Ok(HwndRenderTarget(ComPtr::from_raw(target)))
        }
    }
}

/// A render target presenting to a window's client area.
pub struct HwndRenderTarget(ComPtr<ID2D1HwndRenderTarget>);

pub struct SolidBrush(ComPtr<ID2D1SolidColorBrush>);

impl SolidBrush {
    fn as_brush(&self) -> *mut ID2D1Brush {
        self.0.as_raw() as *mut ID2D1Brush
    }
}

impl RenderTarget for HwndRenderTarget {
    type Brush = SolidBrush;

    fn create_solid_brush(&mut self, color: Color) -> Result<SolidBrush, DeviceError> {
        let color = color_f(color);
        let mut brush: *mut ID2D1SolidColorBrush = ptr::null_mut();
        unsafe {
            check_hr(self.0.CreateSolidColorBrush(&color, ptr::null(), &mut brush))?;
            Ok(SolidBrush(ComPtr::from_raw(brush)))
        }
    }

    fn resize(&mut self, size: ClientSize) -> Result<(), DeviceError> {
        let size = size_u(size);
        unsafe { check_hr(self.0.Resize(&size)) }
    }

    fn begin_draw(&mut self) {
        unsafe { self.0.BeginDraw() }
    }

    fn clear(&mut self, color: Color) {
        let color = color_f(color);
        unsafe { self.0.Clear(&color) }
    }

    fn draw_rect(&mut self, rect: Rect, brush: &SolidBrush, stroke_width: f32) {
        let rect = rect_f(rect);
        unsafe {
            self.0
                .DrawRectangle(&rect, brush.as_brush(), stroke_width, ptr::null_mut())
        }
    }

    fn end_draw(&mut self) -> Result<(), DeviceError> {
        unsafe { check_hr(self.0.EndDraw(ptr::null_mut(), ptr::null_mut())) }
    }
}

fn size_u(size: ClientSize) -> D2D1_SIZE_U {
    D2D1_SIZE_U {
        width: size.width,
        height: size.height,
    }
}

fn color_f(color: Color) -> D2D1_COLOR_F {
    D2D1_COLOR_F {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

fn rect_f(rect: Rect) -> D2D1_RECT_F {
    D2D1_RECT_F {
        left: rect.x0 as f32,
        top: rect.y0 as f32,
        right: rect.x1 as f32,
        bottom: rect.y1 as f32,
    }
}
