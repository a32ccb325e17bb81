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

//! Keyboard types.

pub use keyboard_types::{Code, KeyState};

/// The meaning (mapped value) of a keypress.
pub type KbKey = keyboard_types::Key;

/// The key that toggles fullscreen.
pub const FULLSCREEN_KEY: KbKey = KbKey::F11;

// Win32 virtual-key codes of the function row.
const VK_F1: u32 = 0x70;
const VK_F24: u32 = 0x87;
const VK_ESCAPE: u32 = 0x1B;
const VK_RETURN: u32 = 0x0D;
const VK_SPACE: u32 = 0x20;
const VK_TAB: u32 = 0x09;

/// A key press or release, reduced to what the window reacts to.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyEvent {
    /// Whether the key is pressed or released.
    pub state: KeyState,
    /// Logical key value.
    pub key: KbKey,
    /// Physical key position.
    pub code: Code,
}

impl KeyEvent {
    /// Build an event from a Win32 virtual-key code.
    ///
    /// Keys outside the small set we recognise map to
    /// [`KbKey::Unidentified`].
    pub fn from_virtual_key(vk: u32, state: KeyState) -> Self {
        let (key, code) = match vk {
            VK_F1..=VK_F24 => function_key(vk - VK_F1 + 1),
            VK_ESCAPE => (KbKey::Escape, Code::Escape),
            VK_RETURN => (KbKey::Enter, Code::Enter),
            VK_TAB => (KbKey::Tab, Code::Tab),
            VK_SPACE => (KbKey::Character(" ".into()), Code::Space),
            _ => (KbKey::Unidentified, Code::Unidentified),
        };
        KeyEvent { state, key, code }
    }

    /// Whether this is the release of the fullscreen key.
    pub fn is_fullscreen_toggle(&self) -> bool {
        self.state == KeyState::Up && self.key == FULLSCREEN_KEY
    }
}

fn function_key(n: u32) -> (KbKey, Code) {
    match n {
        1 => (KbKey::F1, Code::F1),
        2 => (KbKey::F2, Code::F2),
        3 => (KbKey::F3, Code::F3),
        4 => (KbKey::F4, Code::F4),
        5 => (KbKey::F5, Code::F5),
        6 => (KbKey::F6, Code::F6),
        7 => (KbKey::F7, Code::F7),
        8 => (KbKey::F8, Code::F8),
        9 => (KbKey::F9, Code::F9),
        10 => (KbKey::F10, Code::F10),
        11 => (KbKey::F11, Code::F11),
        12 => (KbKey::F12, Code::F12),
        // keyboard-types has no dedicated variants past F12
        _ => (KbKey::Unidentified, Code::Unidentified),
    }
}
