// Keyboard bindings

use glam::Vec3;

use crate::camera::CameraAxis;

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Nudge the selected object by this many steps per axis.
    MoveObject(Vec3),
    /// Move the camera one step along a camera-relative axis.
    MoveCamera(CameraAxis, f32),
}

/// Maps a key name (as in DOM `KeyboardEvent.key`) to its action.
pub fn key_action(key: &str) -> Option<KeyAction> {
    let action = match key {
        "ArrowUp" => KeyAction::MoveObject(Vec3::Z),
        "ArrowDown" => KeyAction::MoveObject(Vec3::NEG_Z),
        "ArrowLeft" => KeyAction::MoveObject(Vec3::NEG_X),
        "ArrowRight" => KeyAction::MoveObject(Vec3::X),
        "PageUp" => KeyAction::MoveObject(Vec3::Y),
        "PageDown" => KeyAction::MoveObject(Vec3::NEG_Y),
        "w" | "W" => KeyAction::MoveCamera(CameraAxis::Forward, 1.0),
        "s" | "S" => KeyAction::MoveCamera(CameraAxis::Forward, -1.0),
        "a" | "A" => KeyAction::MoveCamera(CameraAxis::Right, -1.0),
        "d" | "D" => KeyAction::MoveCamera(CameraAxis::Right, 1.0),
        "q" | "Q" => KeyAction::MoveCamera(CameraAxis::Up, 1.0),
        "r" | "R" => KeyAction::MoveCamera(CameraAxis::Up, -1.0),
        _ => return None,
    };
    Some(action)
}
