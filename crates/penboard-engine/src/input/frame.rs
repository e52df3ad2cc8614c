use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer position).
/// `InputFrame` provides events and transition sets for the current frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyState, Modifiers, MouseButtonState, PointerButtonEvent};

    #[test]
    fn events_keep_arrival_order() {
        let mut frame = InputFrame::default();
        for (key, state) in [
            (Key::T, KeyState::Pressed),
            (Key::T, KeyState::Released),
            (Key::Digit3, KeyState::Pressed),
        ] {
            frame.push_event(InputEvent::Key {
                key,
                state,
                modifiers: Modifiers::default(),
                code: 0,
                text: None,
                repeat: false,
            });
        }
        for (button, x) in [(MouseButton::Left, 1.0), (MouseButton::Right, 2.0), (MouseButton::Left, 3.0)] {
            frame.push_event(InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: MouseButtonState::Pressed,
                x,
                y: 0.0,
                modifiers: Modifiers::default(),
            }));
        }

        assert_eq!(frame.events.len(), 6);
        assert!(matches!(frame.events[2], InputEvent::Key { key: Key::Digit3, .. }));
        assert!(matches!(&frame.events[5], InputEvent::PointerButton(b) if b.x == 3.0));

        frame.clear();
        assert!(frame.events.is_empty());
    }
}
