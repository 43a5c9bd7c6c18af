// Scene lights

use glam::Vec3;

use crate::appearance::Color;
use crate::error::{EditorError, Result};

/// Intensity given to point and directional lights.
pub const DEFAULT_LIGHT_INTENSITY: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point,
}

impl LightKind {
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ambient" => Ok(LightKind::Ambient),
            "directional" => Ok(LightKind::Directional),
            "point" => Ok(LightKind::Point),
            other => Err(EditorError::UnsupportedKind(format!("{other} light"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    /// Shines from `position` toward `target`.
    Directional {
        color: Color,
        position: Vec3,
        target: Vec3,
        intensity: f32,
    },
    Point {
        color: Color,
        position: Vec3,
        intensity: f32,
    },
}

impl Light {
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Light::Ambient { color, intensity }
    }

    pub fn directional(color: Color, position: Vec3, target: Vec3) -> Self {
        Light::Directional {
            color,
            position,
            target,
            intensity: DEFAULT_LIGHT_INTENSITY,
        }
    }

    pub fn point(color: Color, position: Vec3) -> Self {
        Light::Point {
            color,
            position,
            intensity: DEFAULT_LIGHT_INTENSITY,
        }
    }

    pub fn kind(&self) -> LightKind {
        match self {
            Light::Ambient { .. } => LightKind::Ambient,
            Light::Directional { .. } => LightKind::Directional,
            Light::Point { .. } => LightKind::Point,
        }
    }

    /// Unit direction the light travels, for directional lights.
    pub fn direction(&self) -> Option<Vec3> {
        match self {
            Light::Directional {
                position, target, ..
            } => (*target - *position).try_normalize(),
            _ => None,
        }
    }
}
