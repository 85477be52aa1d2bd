use druid::kurbo::Point;
use druid::MouseButton;

/// Pointer and key state as seen by one frame. `pointer` is in window
/// pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub pointer: Point,
    pub left: bool,
    pub right: bool,
    /// Left went down since the previous frame
    pub left_just_pressed: bool,
    pub space: bool,
}

impl InputSnapshot {
    pub fn touched(&self) -> bool {
        self.left || self.right
    }
}

/// Folds window events into per-frame snapshots.
#[derive(Debug, Default)]
pub struct InputTracker {
    current: InputSnapshot,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_down(&mut self, pos: Point, button: MouseButton) {
        self.current.pointer = pos;
        match button {
            MouseButton::Left => {
                self.current.left = true;
                self.current.left_just_pressed = true;
            }
            MouseButton::Right => self.current.right = true,
            _ => {}
        }
    }

    pub fn mouse_up(&mut self, pos: Point, button: MouseButton) {
        self.current.pointer = pos;
        match button {
            MouseButton::Left => self.current.left = false,
            MouseButton::Right => self.current.right = false,
            _ => {}
        }
    }

    pub fn mouse_move(&mut self, pos: Point) {
        self.current.pointer = pos;
    }

    pub fn set_space(&mut self, down: bool) {
        self.current.space = down;
    }

    /// Releases every button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.current.left = false;
        self.current.right = false;
        self.current.space = false;
    }

    /// Returns the state for this frame and clears the edge flags.
    pub fn frame(&mut self) -> InputSnapshot {
        let snapshot = self.current;
        self.current.left_just_pressed = false;
        snapshot
    }
}
