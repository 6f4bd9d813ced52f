//! # Curtain
//!
//! A pair of stage curtains that slide open toward the sides from the
//! first update on, squeezing horizontally down to a minimum scale.
//! Added last in a machine so the closed curtains cover everything.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{Component, DrawContext, UpdateContext};
use crate::shape::ShapeDef;

/// Full stage opening covered by the closed curtains.
const CURTAIN_WIDTH: f32 = 600.0;
const CURTAIN_HEIGHT: f32 = 550.0 / 1.5;

/// Horizontal scale of an open curtain half.
const MIN_SCALE: f32 = 0.15;

/// Scale lost per update while opening.
const STEP_RATE: f32 = 0.01;

const ROD_THICKNESS: f32 = 8.0;

pub struct Curtain {
    position: Vec2,
    step: f32,
}

impl Default for Curtain {
    fn default() -> Self {
        Self::new()
    }
}

impl Curtain {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            step: 1.0,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Horizontal scale of each half, 1 closed down to about 0.15 open.
    pub fn scale(&self) -> f32 {
        self.step
    }
}

impl Component for Curtain {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {
        if self.step > MIN_SCALE {
            self.step -= STEP_RATE;
        }
    }

    fn draw(&self, _ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        let half_width = CURTAIN_WIDTH / 2.0;
        let half = ShapeDef::rectangle(0.0, 0.0, half_width, CURTAIN_HEIGHT);

        let rod = ShapeDef::rectangle(
            -half_width,
            CURTAIN_HEIGHT - ROD_THICKNESS,
            CURTAIN_WIDTH,
            ROD_THICKNESS,
        );
        rod.draw(canvas, self.position, 0.0, Color::BROWN);

        // Each half is pinned at its outer edge and squeezed toward it.
        canvas.push();
        canvas.scale(self.step, 1.0);
        canvas.translate(Vec2::new(half_width * (self.step - 1.0) / self.step, 0.0));
        half.draw(
            canvas,
            Vec2::new(self.position.x - half_width, self.position.y),
            0.0,
            Color::CRIMSON,
        );
        canvas.pop();

        canvas.push();
        canvas.scale(self.step, 1.0);
        canvas.translate(Vec2::new(half_width * (1.0 - self.step) / self.step, 0.0));
        half.draw(canvas, self.position, 0.0, Color::CRIMSON);
        canvas.pop();
    }

    fn reset(&mut self) {
        self.step = 1.0;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
