//! # Shapes
//!
//! Geometry definitions shared by physics installation and drawing.
//! Shapes are declared in body-local coordinates; the convention for
//! most machine parts is a bottom-centered footprint so a part placed
//! at `(x, y)` rests its base on that point.

use canvas::{Canvas, Color};
use glam::Vec2;

/// Segments used to outline a circle.
const CIRCLE_SEGMENTS: usize = 32;

/// A convex shape in body-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDef {
    /// Axis-aligned rectangle given by its lower-left corner and size.
    Rect { origin: Vec2, size: Vec2 },
    /// Arbitrary convex polygon given by its corner points.
    Polygon { points: Vec<Vec2> },
    /// Circle centered on the body origin.
    Circle { radius: f32 },
}

impl ShapeDef {
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Rect {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle whose bottom edge is centered on the body origin.
    pub fn bottom_centered_rectangle(width: f32, height: f32) -> Self {
        Self::rectangle(-width / 2.0, 0.0, width, height)
    }

    pub fn circle(radius: f32) -> Self {
        Self::Circle { radius }
    }

    pub fn points(points: Vec<Vec2>) -> Self {
        Self::Polygon { points }
    }

    /// Corner points tracing the shape boundary counterclockwise.
    pub fn outline(&self) -> Vec<Vec2> {
        match self {
            Self::Rect { origin, size } => vec![
                *origin,
                *origin + Vec2::new(size.x, 0.0),
                *origin + *size,
                *origin + Vec2::new(0.0, size.y),
            ],
            Self::Polygon { points } => points.clone(),
            Self::Circle { radius } => (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = (i as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
                    Vec2::new(angle.cos(), angle.sin()) * *radius
                })
                .collect(),
        }
    }

    /// Fill the shape at a world position and rotation.
    pub fn draw(&self, canvas: &mut dyn Canvas, position: Vec2, rotation: f32, color: Color) {
        canvas.push();
        canvas.translate(position);
        canvas.rotate(rotation);
        canvas.fill_polygon(&self.outline(), color);
        canvas.pop();
    }

    /// Outline the shape at a world position and rotation.
    pub fn stroke(
        &self,
        canvas: &mut dyn Canvas,
        position: Vec2,
        rotation: f32,
        color: Color,
        width: f32,
    ) {
        canvas.push();
        canvas.translate(position);
        canvas.rotate(rotation);
        canvas.stroke_polygon(&self.outline(), color, width);
        canvas.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_centered_rectangle_straddles_origin() {
        let shape = ShapeDef::bottom_centered_rectangle(40.0, 8.0);
        let outline = shape.outline();
        assert_eq!(outline[0], Vec2::new(-20.0, 0.0));
        assert_eq!(outline[2], Vec2::new(20.0, 8.0));
    }

    #[test]
    fn circle_outline_stays_on_radius() {
        let shape = ShapeDef::circle(12.0);
        for point in shape.outline() {
            assert!((point.length() - 12.0).abs() < 1e-4);
        }
    }
}
