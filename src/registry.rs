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

//! Lookup of window state from the integer the windowing system hands back.
//!
//! The windowing system calls into us with nothing but a native handle and
//! whatever integer we stored in the window's extra bytes. That integer is a
//! [`WindowKey`] in raw form: an opaque arena index that never resolves to
//! the wrong window, even after removals.

use std::cell::RefCell;

use slotmap::{new_key_type, Key, KeyData, SlotMap};
use tracing::warn;

use crate::device::Device;
use crate::msgs::Message;
use crate::window::{DeferredOp, WindowHost, WindowState};

new_key_type! {
    /// Stable index of a window in a [`WindowRegistry`].
    pub struct WindowKey;
}

impl WindowKey {
    /// The form stored in native per-window storage.
    ///
    /// On 64-bit targets this carries the slot index and its version. On
    /// 32-bit targets `isize` only holds the index, so a key only resolves
    /// while its slot has never been reused.
    pub fn to_raw(self) -> isize {
        self.data().as_ffi() as isize
    }

    /// Rebuild a key from native per-window storage. Any value is accepted;
    /// values that were never handed out simply do not resolve.
    pub fn from_raw(raw: isize) -> Self {
        KeyData::from_ffi(raw as u64).into()
    }
}

/// Ordered collection of per-window state.
///
/// Removing a window leaves a tombstone: its key stops resolving and is
/// never handed out again, and no other key moves.
pub struct WindowRegistry<W> {
    windows: SlotMap<WindowKey, W>,
}

impl<W> WindowRegistry<W> {
    pub fn new() -> Self {
        WindowRegistry {
            windows: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, window: W) -> WindowKey {
        self.windows.insert(window)
    }

    pub fn get(&self, key: WindowKey) -> Option<&W> {
        self.windows.get(key)
    }

    pub fn get_mut(&mut self, key: WindowKey) -> Option<&mut W> {
        self.windows.get_mut(key)
    }

    /// Look a window up by the raw value read back from the windowing system.
    pub fn resolve(&mut self, raw: isize) -> Option<&mut W> {
        if self.windows.is_empty() {
            return None;
        }
        self.windows.get_mut(WindowKey::from_raw(raw))
    }

    pub fn remove(&mut self, key: WindowKey) -> Option<W> {
        self.windows.remove(key)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl<W> Default for WindowRegistry<W> {
    fn default() -> Self {
        WindowRegistry::new()
    }
}

/// Route a message to the window stored under `raw`, then to `default`.
///
/// The window's queued operations are handed to `perform` once the registry
/// borrow is released, because performing them can route new messages
/// through here. Whatever happens, the result is `default()`'s: no message is
/// swallowed. A message arriving while the registry is already borrowed only
/// reaches `default`.
pub fn dispatch<H: WindowHost, D: Device, R>(
    registry: &RefCell<WindowRegistry<WindowState<H, D>>>,
    raw: isize,
    message: &Message,
    mut perform: impl FnMut(DeferredOp),
    default: impl FnOnce() -> R,
) -> R {
    let deferred = match registry.try_borrow_mut() {
        Ok(mut windows) => windows.resolve(raw).map(|window| {
            window.handle_message(message);
            window.take_deferred()
        }),
        Err(_) => {
            warn!(?message, "window state already borrowed, using default handling");
            None
        }
    };
    for op in deferred.into_iter().flatten() {
        perform(op);
    }
    default()
}
