//! # Body
//!
//! A plain physics-backed part: beams, balls, ramps, dominoes, and
//! driven loads such as a motor-powered arm. The only component whose
//! drawn pose comes straight from the physics engine.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{AttachContext, Component, DrawContext, UpdateContext};
use crate::physics::{BodyKind, PhysicsBody};
use crate::rotation::SinkId;
use crate::shape::ShapeDef;

pub struct Body {
    physics: PhysicsBody,
    sink: Option<SinkId>,
    color: Color,
}

impl Body {
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_shape(ShapeDef::rectangle(x, y, width, height))
    }

    pub fn bottom_centered_rectangle(width: f32, height: f32) -> Self {
        Self::from_shape(ShapeDef::bottom_centered_rectangle(width, height))
    }

    pub fn circle(radius: f32) -> Self {
        Self::from_shape(ShapeDef::circle(radius))
    }

    pub fn points(points: Vec<Vec2>) -> Self {
        Self::from_shape(ShapeDef::points(points))
    }

    fn from_shape(shape: ShapeDef) -> Self {
        Self {
            physics: PhysicsBody::new(shape),
            sink: None,
            color: Color::GRAY,
        }
    }

    /// Make the body force- and collision-driven.
    pub fn dynamic(mut self) -> Self {
        self.physics.set_dynamic();
        self
    }

    /// Make the body velocity-commanded; its angular velocity then
    /// follows the rotation sink every update.
    pub fn kinematic(mut self) -> Self {
        self.physics.set_kinematic();
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.physics.set_initial_position(Vec2::new(x, y));
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn material(mut self, density: f32, friction: f32, restitution: f32) -> Self {
        self.physics.set_material(density, friction, restitution);
        self
    }

    pub fn physics(&self) -> &PhysicsBody {
        &self.physics
    }
}

impl Component for Body {
    fn position(&self) -> Vec2 {
        self.physics.initial_position()
    }

    fn set_position(&mut self, position: Vec2) {
        self.physics.set_initial_position(position);
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) {
        if self.sink.is_none() {
            self.sink = Some(ctx.rotation.add_sink(ctx.id));
        }
        self.physics.install(ctx.world);
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.physics.kind() != BodyKind::Kinematic {
            return;
        }
        let Some(sink) = self.sink else {
            return;
        };
        // Convert the accumulated target rotation into a velocity
        // command for the upcoming step. Zero time means zero velocity,
        // never a division blow-up.
        let rotation = ctx.rotation.sink_rotation(sink);
        let velocity = if ctx.time > 0.0 { -rotation / ctx.time } else { 0.0 };
        self.physics.set_angular_velocity(ctx.world, velocity);
    }

    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        self.physics.draw(ctx.world, canvas, self.color);
    }

    fn sink(&self) -> Option<SinkId> {
        self.sink
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
