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

//! Sizes, rectangles and colors used when painting.

use kurbo::Rect;

/// Distance of the outer rectangle from every edge of the client area.
pub const OUTER_INSET: f64 = 5.0;
/// Distance of the inner rectangle from the top-left corner.
pub const INNER_INSET: f64 = 10.0;
/// Largest coordinate the inner rectangle's far corner may reach.
pub const INNER_MAX_EXTENT: f64 = 200.0;
/// Stroke width of both rectangles.
pub const STROKE_WIDTH: f32 = 1.0;

/// Size of a window's client area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClientSize {
    pub width: u32,
    pub height: u32,
}

impl ClientSize {
    pub const fn new(width: u32, height: u32) -> Self {
        ClientSize { width, height }
    }

    /// The size of a native `(left, top, right, bottom)` client rectangle.
    ///
    /// Inverted rectangles clamp to zero.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let span = |lo: i32, hi: i32| u32::try_from(i64::from(hi) - i64::from(lo)).unwrap_or(0);
        ClientSize {
            width: span(left, right),
            height: span(top, bottom),
        }
    }

    /// The outlined frame: inset [`OUTER_INSET`] from each edge.
    pub fn outer_rect(self) -> Rect {
        Rect::new(
            OUTER_INSET,
            OUTER_INSET,
            f64::from(self.width) - OUTER_INSET,
            f64::from(self.height) - OUTER_INSET,
        )
    }

    /// The small square in the top-left corner.
    ///
    /// Starts at `(10, 10)`; its far corner is capped at 200 on each axis,
    /// or sits 10 units short of the client edge when the client is smaller.
    pub fn inner_rect(self) -> Rect {
        Rect::new(
            INNER_INSET,
            INNER_INSET,
            INNER_MAX_EXTENT.min(f64::from(self.width) - INNER_INSET),
            INNER_MAX_EXTENT.min(f64::from(self.height) - INNER_INSET),
        )
    }
}

/// A straight RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Clear color of every frame.
    pub const BACKGROUND: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Stroke color of both rectangles.
    pub const FOREGROUND: Color = Color::rgba(0.67, 0.67, 0.67, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

/// A window rectangle in screen coordinates, as native calls report it.
///
/// Coordinates are whole pixels; converting through `f64` is exact.
pub fn window_rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    Rect::new(left.into(), top.into(), right.into(), bottom.into())
}

/// A rectangle as native `(left, top, right, bottom)` pixels.
///
/// Fractional coordinates round to the nearest pixel.
pub fn to_ltrb(rect: Rect) -> (i32, i32, i32, i32) {
    let rect = rect.round();
    (rect.x0 as i32, rect.y0 as i32, rect.x1 as i32, rect.y1 as i32)
}

/// Splits a window rectangle back into `(x, y, width, height)` pixels.
pub fn to_position(rect: Rect) -> (i32, i32, i32, i32) {
    (
        rect.x0 as i32,
        rect.y0 as i32,
        rect.width() as i32,
        rect.height() as i32,
    )
}
