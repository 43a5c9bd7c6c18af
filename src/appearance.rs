// Colors, textures and materials

use glam::Vec3;

use crate::error::{EditorError, Result};

/// Linear RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    pub const WHITE: Color = Color(Vec3::ONE);

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || EditorError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };
        Ok(Color(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)))
    }

    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

const ALLOWED_TEXTURE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Reference to an image decoded elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRef {
    pub source: String,
    pub mime: String,
}

impl TextureRef {
    pub fn new(source: impl Into<String>, mime: impl Into<String>) -> Result<Self> {
        let mime = mime.into();
        if !ALLOWED_TEXTURE_TYPES.contains(&mime.as_str()) {
            return Err(EditorError::UnsupportedTexture(mime));
        }
        Ok(Self {
            source: source.into(),
            mime,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub texture: Option<TextureRef>,
    /// Keep tinting with `color` once a texture is attached.
    pub color_flag: bool,
}

impl Material {
    pub fn new(color_flag: bool) -> Self {
        Self {
            color: Color::WHITE,
            texture: None,
            color_flag,
        }
    }

    /// Color multiplied into the surface when drawing.
    pub fn tint(&self) -> Color {
        match self.texture {
            Some(_) if !self.color_flag => Color::WHITE,
            _ => self.color,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(false)
    }
}
