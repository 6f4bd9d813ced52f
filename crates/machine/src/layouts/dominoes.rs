//! Domino bodies in the four stock colors.

use canvas::Color;
use glam::Vec2;

use crate::components::Body;

/// Domino footprint, lower-left anchored.
const DOMINO_SIZE: Vec2 = Vec2::new(5.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominoColor {
    Green,
    Red,
    Blue,
    Black,
}

impl DominoColor {
    fn paint(self) -> Color {
        match self {
            DominoColor::Green => Color::GREEN,
            DominoColor::Red => Color::RED,
            DominoColor::Blue => Color::BLUE,
            DominoColor::Black => Color::BLACK,
        }
    }
}

/// A dynamic domino standing with its lower-left corner at `(x, y)`.
pub fn domino(x: f32, y: f32, color: DominoColor) -> Body {
    Body::rectangle(0.0, 0.0, DOMINO_SIZE.x, DOMINO_SIZE.y)
        .dynamic()
        .at(x, y)
        .color(color.paint())
}
