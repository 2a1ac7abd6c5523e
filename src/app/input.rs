use std::collections::HashSet;

use ggez::event::MouseButton;
use ggez::input::keyboard::KeyCode;
use ggez::Context;

use crate::basic::Point;

/// Whole-keyboard state at one poll
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pressed: HashSet<KeyCode>,
}

impl KeyboardSnapshot {
    pub fn new<I: IntoIterator<Item = KeyCode>>(pressed: I) -> Self {
        Self { pressed: pressed.into_iter().collect() }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Down now but not at the previous poll
    pub fn just_pressed(&self, previous: &Self, key: KeyCode) -> bool {
        self.is_down(key) && !previous.is_down(key)
    }
}

/// Mouse state at one poll
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MouseSnapshot {
    pub position: Point,
    pub left: bool,
}

impl MouseSnapshot {
    /// Left button down now but released at the previous poll
    pub fn left_just_pressed(&self, previous: &Self) -> bool {
        self.left && !previous.left
    }
}

/// Anything that can be asked for the current input state, the
/// real implementation is `ggez::Context`
pub trait InputSource {
    fn keyboard(&self) -> KeyboardSnapshot;
    fn mouse(&self) -> MouseSnapshot;
}

impl InputSource for Context {
    fn keyboard(&self) -> KeyboardSnapshot {
        KeyboardSnapshot::new(self.keyboard.pressed_keys().iter().copied())
    }

    fn mouse(&self) -> MouseSnapshot {
        MouseSnapshot {
            position: self.mouse.position().into(),
            left: self.mouse.button_pressed(MouseButton::Left),
        }
    }
}

/// Keeps the snapshots of the previous poll so that
/// handlers can tell presses from holds
#[derive(Default)]
pub struct InputTracker {
    keyboard: KeyboardSnapshot,
    mouse: MouseSnapshot,
}

impl InputTracker {
    /// Poll both devices once and return `(current, previous)`
    /// pairs, the current ones become the previous ones
    pub fn poll<S: InputSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> ((KeyboardSnapshot, KeyboardSnapshot), (MouseSnapshot, MouseSnapshot)) {
        let keyboard = source.keyboard();
        let mouse = source.mouse();
        let prev_keyboard = std::mem::replace(&mut self.keyboard, keyboard.clone());
        let prev_mouse = std::mem::replace(&mut self.mouse, mouse);
        ((keyboard, prev_keyboard), (mouse, prev_mouse))
    }
}
