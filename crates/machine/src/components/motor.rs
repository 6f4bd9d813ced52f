//! # Motor
//!
//! The machine's power plant: a caged runner wheel that feeds a
//! rotation source. Dormant motors latch on when something lands on
//! the cage and then never stop until the machine resets.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{AttachContext, Component, Contact, DrawContext, UpdateContext};
use crate::physics::PhysicsBody;
use crate::rotation::{RotationGraph, SourceId};
use crate::shape::ShapeDef;

/// Cage footprint in machine units.
const CAGE_SIZE: Vec2 = Vec2::new(75.0, 50.0);

/// Wheel center relative to the bottom center of the cage.
const WHEEL_CENTER: Vec2 = Vec2::new(-12.0, 24.0);

/// Wheel diameter.
const WHEEL_DIAMETER: f32 = 45.0;

/// Output shaft center relative to the bottom center of the cage.
const SHAFT_OFFSET: Vec2 = Vec2::new(25.0, 40.0);

/// Animation cycles per unit of wheel rotation.
const ANIMATION_RATE: f32 = 4.0;

/// Runner marker color per animation frame; frame 0 is asleep.
const FRAME_COLORS: [Color; 4] = [Color::DARK_GRAY, Color::TAN, Color::GOLD, Color::BROWN];

pub struct Motor {
    position: Vec2,
    speed: f32,
    initially_running: bool,
    running: bool,
    source: Option<SourceId>,
    cage: PhysicsBody,
}

impl Default for Motor {
    fn default() -> Self {
        Self::new()
    }
}

impl Motor {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            speed: 1.0,
            initially_running: false,
            running: false,
            source: None,
            cage: PhysicsBody::new(ShapeDef::bottom_centered_rectangle(CAGE_SIZE.x, CAGE_SIZE.y)),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Wheel turns per second while running. Negative runs backwards.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Start in the running state instead of waiting for a contact.
    pub fn initially_running(mut self, running: bool) -> Self {
        self.initially_running = running;
        self.running = running;
        self
    }

    /// Where loads mount on the output shaft.
    pub fn shaft_position(&self) -> Vec2 {
        self.position + SHAFT_OFFSET
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Animation frame for the current wheel rotation. The fractional
    /// animation cycle is quartered, with the third quarter getting its
    /// own frame and the rest of the upper half sharing one.
    fn animation_frame(&self, rotation: f32) -> usize {
        if !self.running || self.speed == 0.0 {
            return 0;
        }
        let cycle = (ANIMATION_RATE * rotation).fract().abs();
        if cycle < 0.25 {
            1
        } else if cycle > 0.5 && cycle < 0.75 {
            3
        } else {
            2
        }
    }
}

impl Component for Motor {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) {
        if self.source.is_none() {
            self.source = Some(ctx.rotation.add_source(ctx.id));
        }
        self.cage.set_initial_position(self.position);
        self.cage.install(ctx.world);
        if let Some(collider) = self.cage.collider() {
            ctx.contacts.register(collider, ctx.id);
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let Some(source) = self.source else {
            return;
        };
        if self.running {
            let rotation = ctx.rotation.rotation(source) - self.speed * ctx.elapsed;
            ctx.rotation.set_rotation(source, rotation);
        }
    }

    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        self.cage.shape().draw(canvas, self.position, 0.0, Color::TAN);
        self.cage
            .shape()
            .stroke(canvas, self.position, 0.0, Color::BROWN, 2.0);

        let rotation = self.rotation(ctx.rotation);
        canvas.push();
        canvas.translate(self.position + WHEEL_CENTER);

        let wheel = ShapeDef::circle(WHEEL_DIAMETER / 2.0);
        wheel.draw(canvas, Vec2::ZERO, rotation, Color::WHITE);
        wheel.stroke(canvas, Vec2::ZERO, rotation, Color::DARK_GRAY, 1.5);
        // one spoke so the spin is visible
        canvas.push();
        canvas.rotate(rotation);
        canvas.line(
            Vec2::ZERO,
            Vec2::new(WHEEL_DIAMETER / 2.0, 0.0),
            Color::DARK_GRAY,
            1.5,
        );
        canvas.pop();

        if self.speed < 0.0 {
            canvas.scale(-1.0, 1.0);
        }
        let runner = ShapeDef::bottom_centered_rectangle(12.0, 16.0);
        runner.draw(
            canvas,
            Vec2::new(0.0, -8.0),
            0.0,
            FRAME_COLORS[self.animation_frame(rotation)],
        );
        canvas.pop();
    }

    fn reset(&mut self) {
        self.running = self.initially_running;
    }

    fn begin_contact(&mut self, _contact: &Contact) {
        if !self.running {
            tracing::debug!("motor latched on");
        }
        self.running = true;
    }

    fn rotation(&self, rotation: &RotationGraph) -> f32 {
        self.source.map_or(0.0, |source| rotation.rotation(source))
    }

    fn set_rotation(&mut self, rotation: &mut RotationGraph, value: f32) {
        if let Some(source) = self.source {
            rotation.set_rotation(source, value);
        }
    }

    fn source(&self) -> Option<SourceId> {
        self.source
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
