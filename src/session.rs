//! An editing session: the editor plus the UI state around it.

use glam::Vec3;
use log::debug;

use crate::appearance::TextureRef;
use crate::camera::FirstPersonCamera;
use crate::command::{Command, CommandError};
use crate::config::EditorConfig;
use crate::editor::{Editor, Placement};
use crate::error::EditorError;
use crate::input::{key_action, KeyAction};
use crate::light::{Light, LightKind};
use crate::math::degrees_to_radians;

/// What a command produced, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done,
    Placed(usize),
    /// Selection list labels.
    Listing(Vec<String>),
    Quit,
}

pub struct Session {
    pub editor: Editor,
    pub camera: FirstPersonCamera,
    selection: Option<usize>,
}

impl Session {
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        Ok(Self::with_editor(Editor::new(config)?))
    }

    fn with_editor(editor: Editor) -> Self {
        let mut camera = FirstPersonCamera::default();
        camera.speed = editor.config().camera_speed;
        Self {
            editor,
            camera,
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Runs one command to completion.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let outcome = match command {
            Command::Add {
                kind,
                size,
                rotation,
                position,
                name,
            } => {
                let mut placement = Placement::new(kind)
                    .size(size)
                    .rotation(degrees_to_radians(rotation))
                    .at(position);
                placement.name = name;
                Outcome::Placed(self.editor.place(placement)?)
            }
            Command::Move { index, delta } => {
                self.editor.translate(index, delta)?;
                Outcome::Done
            }
            Command::Scale { index, factor } => {
                self.editor.scale(index, factor)?;
                Outcome::Done
            }
            Command::Rotate { index, angles } => {
                self.editor.rotate_degrees(index, angles)?;
                Outcome::Done
            }
            Command::Remove { index } => {
                self.editor.remove(index)?;
                if self.selection == Some(index) {
                    self.selection = None;
                } else if let Some(selected) = self.selection.filter(|&s| s > index) {
                    self.selection = Some(selected - 1);
                }
                Outcome::Done
            }
            Command::Select { index } => {
                self.editor.scene().get(index)?;
                self.selection = Some(index);
                Outcome::Done
            }
            Command::Key(key) => {
                self.press_key(&key)?;
                Outcome::Done
            }
            Command::Color { index, color } => {
                self.editor.apply_color(index, color)?;
                Outcome::Done
            }
            Command::Texture {
                index,
                source,
                mime,
            } => {
                let texture = TextureRef::new(source, mime)?;
                self.editor.apply_texture(index, texture)?;
                Outcome::Done
            }
            Command::Light {
                kind,
                color,
                position,
                target,
            } => {
                let light = match kind {
                    LightKind::Ambient => Light::ambient(color, 1.0),
                    LightKind::Directional => Light::directional(color, position, target),
                    LightKind::Point => Light::point(color, position),
                };
                self.editor.add_light(light);
                Outcome::Done
            }
            Command::List => Outcome::Listing(self.editor.scene().labels()),
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    /// Applies a key press. Object nudges that would cross a wall are dropped.
    pub fn press_key(&mut self, key: &str) -> Result<(), EditorError> {
        match key_action(key) {
            Some(KeyAction::MoveCamera(axis, direction)) => {
                self.camera.step(axis, direction);
                Ok(())
            }
            Some(KeyAction::MoveObject(direction)) => {
                let Some(index) = self.selection else {
                    return Ok(());
                };
                let delta: Vec3 = direction * self.editor.config().move_step;
                match self.editor.translate(index, delta) {
                    Err(EditorError::BoundaryViolation { sides }) => {
                        debug!("Key {key} blocked by {sides:?}");
                        Ok(())
                    }
                    other => other,
                }
            }
            None => Ok(()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_editor(Editor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn run(session: &mut Session, line: &str) -> Result<Outcome, CommandError> {
        session.execute(line.parse()?)
    }

    #[test]
    fn add_select_and_nudge() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "add cube"), Ok(Outcome::Placed(0)));
        run(&mut session, "select 0").unwrap();
        run(&mut session, "key ArrowRight").unwrap();
        let x = session.editor.scene().get(0).unwrap().transform().position.x;
        assert_abs_diff_eq!(x, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn key_nudge_into_wall_is_silent() {
        let mut session = Session::default();
        run(&mut session, "add cube 2 2 2 0 0 0 0 9 0").unwrap();
        run(&mut session, "select 0").unwrap();
        let before = *session.editor.scene().get(0).unwrap().bounding_box();
        assert_eq!(run(&mut session, "key PageUp"), Ok(Outcome::Done));
        assert_eq!(*session.editor.scene().get(0).unwrap().bounding_box(), before);
    }

    #[test]
    fn camera_keys_move_the_camera() {
        let mut session = Session::default();
        run(&mut session, "key w").unwrap();
        assert_abs_diff_eq!(session.camera.position.z, 3.9, epsilon = 1e-6);
    }

    #[test]
    fn removing_adjusts_selection() {
        let mut session = Session::default();
        for x in [-4, -2, 0, 2] {
            run(&mut session, &format!("add cube 1 1 1 0 0 0 {x} 0 0")).unwrap();
        }
        run(&mut session, "select 3").unwrap();
        run(&mut session, "remove 1").unwrap();
        assert_eq!(session.selection(), Some(2));
        run(&mut session, "remove 2").unwrap();
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn select_out_of_range() {
        let mut session = Session::default();
        assert_eq!(
            run(&mut session, "select 0"),
            Err(CommandError::Editor(EditorError::OutOfRange { index: 0, len: 0 }))
        );
    }

    #[test]
    fn list_uses_labels() {
        let mut session = Session::default();
        run(&mut session, "add cube 1 1 1 0 0 0 0 0 0 table").unwrap();
        run(&mut session, "add pyramid").unwrap();
        assert_eq!(
            run(&mut session, "list"),
            Ok(Outcome::Listing(vec!["table".into(), "Element 1".into()]))
        );
    }

    #[test]
    fn texture_type_is_checked() {
        let mut session = Session::default();
        run(&mut session, "add cube").unwrap();
        assert_eq!(
            run(&mut session, "texture 0 cat.gif image/gif"),
            Err(CommandError::Editor(EditorError::UnsupportedTexture(
                "image/gif".into()
            )))
        );
        assert!(run(&mut session, "texture 0 cat.png image/png").is_ok());
    }

    #[test]
    fn config_reaches_editor_and_camera() {
        let mut config = EditorConfig::default();
        config.camera_speed = 0.5;
        config.room.half_extent = 3.0;
        let session = Session::new(config).unwrap();
        assert_eq!(session.camera.speed, 0.5);
        assert_eq!(session.editor.planes().half_extent(), 3.0);

        config.room.half_extent = 0.0;
        assert_eq!(
            Session::new(config).err(),
            Some(EditorError::InvalidRoom(0.0))
        );
    }

    #[test]
    fn lights_are_added() {
        let mut session = Session::default();
        run(&mut session, "light point #ff0000 1 2 3").unwrap();
        assert_eq!(session.editor.scene().lights.len(), 2);
    }
}
