//! # Banner
//!
//! A rolled-up banner that waits out a countdown and then unfurls
//! leftward from its roll, one step per update.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{Component, DrawContext, UpdateContext};
use crate::shape::ShapeDef;

/// Scale applied to the source artwork dimensions.
const BANNER_SCALE: f32 = 0.42;

const BANNER_WIDTH: f32 = 1024.0 * BANNER_SCALE;
const BANNER_HEIGHT: f32 = 150.0 * BANNER_SCALE;
const ROLL_WIDTH: f32 = 16.0 * BANNER_SCALE;
const ROLL_HEIGHT: f32 = 300.0 * BANNER_SCALE;

/// Fraction of the banner revealed per update once unrolling.
const STEP_RATE: f32 = 0.01;

/// Tall clip window so the banner is never cut off vertically.
const CLIP_HEIGHT: f32 = 700.0;

pub struct Banner {
    position: Vec2,
    step: f32,
    timer: f32,
    countdown: f32,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

impl Banner {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            step: 1.0,
            timer: 0.0,
            countdown: 0.0,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Seconds of machine time before the banner starts to unroll.
    pub fn countdown(mut self, seconds: f32) -> Self {
        self.countdown = seconds;
        self.timer = seconds;
        self
    }

    /// Revealed fraction, 0 when fully rolled up.
    pub fn unfurled(&self) -> f32 {
        1.0 - self.step
    }
}

impl Component for Banner {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.timer -= ctx.elapsed;
        if self.timer <= 0.0 && self.step > 0.0 {
            self.step -= STEP_RATE;
        }
    }

    fn draw(&self, _ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        let revealed = BANNER_WIDTH * (1.0 - self.step);

        canvas.push();
        canvas.clip_rect(
            Vec2::new(self.position.x - revealed, 0.0),
            Vec2::new(revealed, CLIP_HEIGHT),
        );
        canvas.translate(Vec2::new(BANNER_WIDTH - revealed, 0.0));
        let cloth = ShapeDef::rectangle(-BANNER_WIDTH, 0.0, BANNER_WIDTH, BANNER_HEIGHT);
        cloth.draw(canvas, self.position, 0.0, Color::CRIMSON);
        cloth.stroke(canvas, self.position, 0.0, Color::GOLD, 2.0);
        canvas.pop();

        let roll = ShapeDef::rectangle(
            0.0,
            -(ROLL_HEIGHT - BANNER_HEIGHT) / 2.0,
            ROLL_WIDTH,
            ROLL_HEIGHT,
        );
        roll.draw(canvas, self.position, 0.0, Color::DARK_GRAY);
    }

    fn reset(&mut self) {
        self.step = 1.0;
        self.timer = self.countdown;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
