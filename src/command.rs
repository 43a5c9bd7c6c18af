//! Line-oriented editing commands, one per UI event.

use std::str::FromStr;

use glam::Vec3;
use thiserror::Error;

use crate::appearance::Color;
use crate::error::EditorError;
use crate::geometry::{ShapeKind, Size};
use crate::light::LightKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("missing argument: {0}")]
    Missing(&'static str),
    #[error("invalid {what}: {value:?}")]
    Invalid { what: &'static str, value: String },
    #[error(transparent)]
    Editor(#[from] EditorError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Angles in degrees.
    Add {
        kind: ShapeKind,
        size: Size,
        rotation: Vec3,
        position: Vec3,
        name: Option<String>,
    },
    Move { index: usize, delta: Vec3 },
    Scale { index: usize, factor: f32 },
    /// Angles in degrees.
    Rotate { index: usize, angles: Vec3 },
    Remove { index: usize },
    Select { index: usize },
    Key(String),
    Color { index: usize, color: Color },
    Texture { index: usize, source: String, mime: String },
    Light {
        kind: LightKind,
        color: Color,
        position: Vec3,
        target: Vec3,
    },
    List,
    Quit,
}

struct Args<'a> {
    tokens: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
}

impl<'a> Args<'a> {
    fn next(&mut self, what: &'static str) -> Result<&'a str, CommandError> {
        self.tokens.next().ok_or(CommandError::Missing(what))
    }

    fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T, CommandError> {
        let token = self.next(what)?;
        token.parse().map_err(|_| CommandError::Invalid {
            what,
            value: token.to_string(),
        })
    }

    fn vec3(&mut self, what: &'static str) -> Result<Vec3, CommandError> {
        Ok(Vec3::new(self.parse(what)?, self.parse(what)?, self.parse(what)?))
    }

    /// Three numbers if the next token is one, otherwise `default`.
    fn optional_vec3(&mut self, what: &'static str, default: Vec3) -> Result<Vec3, CommandError> {
        match self.tokens.peek() {
            Some(token) if token.parse::<f32>().is_ok() => self.vec3(what),
            _ => Ok(default),
        }
    }

    /// Everything left, joined by single spaces.
    fn rest(&mut self) -> Option<String> {
        let rest: Vec<&str> = self.tokens.by_ref().collect();
        (!rest.is_empty()).then(|| rest.join(" "))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = Args {
            tokens: line.split_whitespace().peekable(),
        };
        let verb = args.tokens.next().ok_or(CommandError::Empty)?;
        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let kind = ShapeKind::parse(args.next("kind")?)?;
                let extent = args.optional_vec3("size", Vec3::ONE)?;
                let size = Size::new(extent.x, extent.y, extent.z);
                Command::Add {
                    kind,
                    size,
                    rotation: args.optional_vec3("rotation", Vec3::ZERO)?,
                    position: args.optional_vec3("position", Vec3::ZERO)?,
                    name: args.rest(),
                }
            }
            "move" => Command::Move {
                index: args.parse("index")?,
                delta: args.vec3("delta")?,
            },
            "scale" => Command::Scale {
                index: args.parse("index")?,
                factor: args.parse("factor")?,
            },
            "rotate" => Command::Rotate {
                index: args.parse("index")?,
                angles: args.vec3("angles")?,
            },
            "remove" => Command::Remove {
                index: args.parse("index")?,
            },
            "select" => Command::Select {
                index: args.parse("index")?,
            },
            "key" => Command::Key(args.next("key")?.to_string()),
            "color" => Command::Color {
                index: args.parse("index")?,
                color: Color::from_hex(args.next("color")?)?,
            },
            "texture" => Command::Texture {
                index: args.parse("index")?,
                source: args.next("source")?.to_string(),
                mime: args.next("mime")?.to_string(),
            },
            "light" => {
                let kind = LightKind::parse(args.next("light kind")?)?;
                let color = Color::from_hex(args.next("color")?)?;
                let position = match kind {
                    LightKind::Ambient => Vec3::ZERO,
                    _ => args.vec3("position")?,
                };
                let target = match kind {
                    LightKind::Directional => args.vec3("target")?,
                    _ => Vec3::ZERO,
                };
                Command::Light {
                    kind,
                    color,
                    position,
                    target,
                }
            }
            "list" => Command::List,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
