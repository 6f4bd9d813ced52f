#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! # Canvas Abstraction
//!
//! The drawing surface the simulation renders into. The core emits draw
//! calls through the [`Canvas`] trait and never touches a concrete
//! rasterizer; a GUI shell provides a real backend, while tests and the
//! headless runtime use the [`DisplayList`] recorder in this crate.
//!
//! All operations compose through a scoped save/restore discipline:
//! transform and clip changes happen between [`Canvas::push`] and
//! [`Canvas::pop`] pairs.

mod color;
mod display;

pub use color::Color;
pub use display::{DisplayList, DrawOp};

use glam::Vec2;

/// A 2D drawing surface with a transform/clip state stack.
pub trait Canvas {
    /// Save the current transform and clip state.
    fn push(&mut self);
    /// Restore the most recently pushed state.
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, x: f32, y: f32);
    /// Rotate the coordinate space by `radians` counterclockwise.
    fn rotate(&mut self, radians: f32);
    /// Restrict drawing to a rectangle given by its corner and size.
    fn clip_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    /// Draw `text` with its baseline origin at `origin`.
    fn text(&mut self, text: &str, origin: Vec2, size: f32, color: Color);
}
