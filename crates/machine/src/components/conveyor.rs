//! # Conveyor
//!
//! A fixed belt that converts rotation delivered to its shaft into a
//! horizontal surface speed. The speed reaches riders twice: through
//! the solver as a tangent velocity on the belt contacts, and directly
//! by overwriting the linear velocity of everything touching the belt
//! each update. Removing either half changes how loads ride the belt.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{AttachContext, Component, DrawContext, UpdateContext};
use crate::physics::PhysicsBody;
use crate::rotation::SinkId;
use crate::shape::ShapeDef;

/// Belt footprint in machine units.
const BELT_SIZE: Vec2 = Vec2::new(125.0, 14.0);

/// Drive shaft center relative to the bottom center of the belt.
const SHAFT_OFFSET: Vec2 = Vec2::new(48.0, 4.0);

pub struct Conveyor {
    position: Vec2,
    body: PhysicsBody,
    sink: Option<SinkId>,
}

impl Default for Conveyor {
    fn default() -> Self {
        Self::new()
    }
}

impl Conveyor {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            body: PhysicsBody::new(ShapeDef::bottom_centered_rectangle(BELT_SIZE.x, BELT_SIZE.y)),
            sink: None,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Where a drive pulley mounts on the belt.
    pub fn shaft_position(&self) -> Vec2 {
        self.position + SHAFT_OFFSET
    }
}

impl Component for Conveyor {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) {
        if self.sink.is_none() {
            self.sink = Some(ctx.rotation.add_sink(ctx.id));
        }
        self.body.set_initial_position(self.position);
        self.body.install(ctx.world);
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let Some(sink) = self.sink else {
            return;
        };
        let Some(collider) = self.body.collider() else {
            return;
        };
        // Average angular speed over the whole run so far, not the
        // instantaneous one. Time zero means the belt has not moved.
        let rotation = ctx.rotation.sink_rotation(sink);
        let speed = if ctx.time > 0.0 {
            -rotation / ctx.time
        } else {
            0.0
        };
        ctx.world.set_surface_speed(collider, speed);
        let riders = ctx.world.touching(collider);
        for body in riders {
            ctx.world.set_linear_velocity(body, Vec2::new(speed, 0.0));
        }
    }

    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        self.body.shape().draw(canvas, self.position, 0.0, Color::DARK_GRAY);
        self.body
            .shape()
            .stroke(canvas, self.position, 0.0, Color::BLACK, 1.5);

        let rotation = self
            .sink
            .map_or(0.0, |sink| ctx.rotation.sink_rotation(sink));
        let shaft = ShapeDef::circle(4.0);
        shaft.draw(canvas, self.shaft_position(), rotation, Color::GRAY);
    }

    fn sink(&self) -> Option<SinkId> {
        self.sink
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
