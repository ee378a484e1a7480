#![warn(missing_docs)]
//! Pointer input handling.
//!
//! [`InputState`] accumulates window events during a frame; [`InputState::snapshot`]
//! freezes it into a [`PointerSnapshot`], the only input value interaction logic sees.

use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Immutable pointer state for one evaluation step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Cursor position in window pixels, or `None` if no pointer is available.
    pub position: Option<(f32, f32)>,
    /// Primary button went down this frame (edge-triggered).
    pub just_pressed: bool,
    /// Primary button is currently down.
    pub held: bool,
}

impl PointerSnapshot {
    /// Pointer at `position` with the button up.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some((x, y)),
            ..Self::default()
        }
    }

    /// Builder: button went down this frame (implies held).
    pub fn pressing(mut self) -> Self {
        self.just_pressed = true;
        self.held = true;
        self
    }

    /// Builder: button is down but did not go down this frame.
    pub fn holding(mut self) -> Self {
        self.just_pressed = false;
        self.held = true;
        self
    }
}

/// Input state tracking for a single frame.
#[derive(Debug)]
pub struct InputState {
    /// Button treated as the activation input.
    primary: MouseButton,
    /// Mouse buttons currently pressed.
    mouse_buttons: HashSet<MouseButton>,
    /// Mouse buttons pressed this frame.
    mouse_just_pressed: HashSet<MouseButton>,
    /// Mouse buttons released this frame.
    mouse_just_released: HashSet<MouseButton>,
    /// Last known cursor position; cleared when the cursor leaves the window.
    cursor: Option<(f32, f32)>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create a new input state using the left mouse button as the primary input.
    pub fn new() -> Self {
        Self::with_primary(MouseButton::Left)
    }

    /// Create a new input state with a custom primary button.
    pub fn with_primary(primary: MouseButton) -> Self {
        Self {
            primary,
            mouse_buttons: HashSet::new(),
            mouse_just_pressed: HashSet::new(),
            mouse_just_released: HashSet::new(),
            cursor: None,
        }
    }

    /// Process a window event to update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press(*button),
                ElementState::Released => self.release(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.clear_cursor(),
            WindowEvent::Focused(false) => {
                // Buttons released while unfocused never reach us.
                let held: Vec<_> = self.mouse_buttons.drain().collect();
                self.mouse_just_released.extend(held);
            }
            _ => {}
        }
    }

    /// Record a button going down.
    pub fn press(&mut self, button: MouseButton) {
        if self.mouse_buttons.insert(button) {
            self.mouse_just_pressed.insert(button);
        }
    }

    /// Record a button going up.
    pub fn release(&mut self, button: MouseButton) {
        self.mouse_buttons.remove(&button);
        self.mouse_just_released.insert(button);
    }

    /// Record a cursor move in window pixels.
    pub fn move_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
    }

    /// Forget the cursor position, as when it leaves the window.
    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Press the primary button.
    pub fn press_primary(&mut self) {
        self.press(self.primary);
    }

    /// Release the primary button.
    pub fn release_primary(&mut self) {
        self.release(self.primary);
    }

    /// Reset per-frame state (call at the start of each frame).
    pub fn begin_frame(&mut self) {
        self.mouse_just_pressed.clear();
        self.mouse_just_released.clear();
    }

    /// Check if a mouse button is currently pressed.
    pub fn mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Check if a mouse button was just pressed this frame.
    pub fn mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse_just_pressed.contains(&button)
    }

    /// Check if a mouse button was just released this frame.
    pub fn mouse_button_just_released(&self, button: MouseButton) -> bool {
        self.mouse_just_released.contains(&button)
    }

    /// Current cursor position, if the cursor is inside the window.
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Freeze the primary pointer state for this frame.
    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            position: self.cursor,
            just_pressed: self.mouse_button_just_pressed(self.primary),
            held: self.mouse_button_pressed(self.primary),
        }
    }
}
