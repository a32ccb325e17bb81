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

//! Window messages the window state reacts to.

use crate::keyboard::{KeyEvent, KeyState};

/// A decoded window message.
///
/// Backends translate their native messages into this type; everything
/// the window does not care about becomes [`Message::Other`] carrying the
/// native id, for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Paint,
    Size,
    Close,
    KeyUp(KeyEvent),
    Other(u32),
}

impl Message {
    // Win32 message ids.
    const WM_SIZE: u32 = 0x0005;
    const WM_PAINT: u32 = 0x000F;
    const WM_CLOSE: u32 = 0x0010;
    const WM_KEYUP: u32 = 0x0101;

    /// Decode a Win32 `(msg, wParam)` pair.
    pub fn from_win32(msg: u32, wparam: usize) -> Message {
        match msg {
            Self::WM_PAINT => Message::Paint,
            Self::WM_SIZE => Message::Size,
            Self::WM_CLOSE => Message::Close,
            Self::WM_KEYUP => {
                Message::KeyUp(KeyEvent::from_virtual_key(wparam as u32, KeyState::Up))
            }
            other => Message::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KbKey;

    #[test]
    fn decodes_handled_messages() {
        assert_eq!(Message::from_win32(0x000F, 0), Message::Paint);
        assert_eq!(Message::from_win32(0x0005, 0), Message::Size);
        assert_eq!(Message::from_win32(0x0010, 0), Message::Close);
        match Message::from_win32(0x0101, 0x7A) {
            Message::KeyUp(event) => assert_eq!(event.key, KbKey::F11),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn key_down_is_not_key_up() {
        // WM_KEYDOWN
        assert_eq!(Message::from_win32(0x0100, 0x7A), Message::Other(0x0100));
    }
}
