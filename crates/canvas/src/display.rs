//! # Display List
//!
//! A [`Canvas`] backend that records every draw call instead of
//! rasterizing. Tests assert on the recorded ops; the headless runtime
//! uses it to report how much a frame draws.

use glam::Vec2;

use crate::{Canvas, Color};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Push,
    Pop,
    Translate(Vec2),
    Scale { x: f32, y: f32 },
    Rotate(f32),
    ClipRect { origin: Vec2, size: Vec2 },
    FillPolygon { points: Vec<Vec2>, color: Color },
    StrokePolygon { points: Vec<Vec2>, color: Color, width: f32 },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    Text { text: String, origin: Vec2, size: f32, color: Color },
}

/// Canvas that records draw calls in order.
#[derive(Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    depth: usize,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every op recorded so far, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True once every push has been matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.depth = 0;
    }
}

impl Canvas for DisplayList {
    fn push(&mut self) {
        self.depth += 1;
        self.ops.push(DrawOp::Push);
    }

    fn pop(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::Pop);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn scale(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::Scale { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn clip_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ops.push(DrawOp::ClipRect { origin, size });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.ops.push(DrawOp::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn text(&mut self, text: &str, origin: Vec2, size: f32, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ops_in_call_order() {
        let mut list = DisplayList::new();
        list.push();
        list.translate(Vec2::new(3.0, 4.0));
        list.fill_polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y], Color::RED);
        list.pop();

        assert_eq!(list.ops().len(), 4);
        assert_eq!(list.ops()[0], DrawOp::Push);
        assert_eq!(list.ops()[1], DrawOp::Translate(Vec2::new(3.0, 4.0)));
        assert!(matches!(
            list.ops()[2],
            DrawOp::FillPolygon { ref points, color: Color::RED } if points.len() == 3
        ));
        assert!(list.is_balanced());
    }

    #[test]
    fn unbalanced_push_is_detectable() {
        let mut list = DisplayList::new();
        list.push();
        assert!(!list.is_balanced());
        list.pop();
        assert!(list.is_balanced());
    }

    #[test]
    fn clear_empties_ops_and_depth() {
        let mut list = DisplayList::new();
        list.push();
        list.line(Vec2::ZERO, Vec2::X, Color::BLACK, 1.0);
        list.clear();
        assert!(list.is_empty());
        assert!(list.is_balanced());
    }
}
