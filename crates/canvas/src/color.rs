//! # Color
//!
//! Plain RGBA color used by every draw call.

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    pub const BROWN: Color = Color::rgb(139, 90, 43);
    pub const TAN: Color = Color::rgb(210, 180, 140);
    pub const ORANGE: Color = Color::rgb(235, 120, 30);
    pub const RED: Color = Color::rgb(200, 30, 30);
    pub const GREEN: Color = Color::rgb(30, 160, 60);
    pub const BLUE: Color = Color::rgb(40, 80, 200);
    pub const GOLD: Color = Color::rgb(218, 165, 32);
    pub const CRIMSON: Color = Color::rgb(150, 20, 40);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
