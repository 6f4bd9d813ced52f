//! # Basket
//!
//! Catches whatever falls in, counts down one second, then throws the
//! contents back out along a configured launch vector and rearms.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{AttachContext, Component, Contact, DrawContext, UpdateContext};
use crate::physics::PhysicsBody;
use crate::shape::ShapeDef;

/// Outer basket size in machine units.
const BASKET_SIZE: f32 = 40.0;

/// Seconds between the catch and the launch.
const LAUNCH_DELAY: f32 = 1.0;

pub struct Basket {
    position: Vec2,
    direction: Vec2,
    timer: f32,
    counting: bool,
    launcher: PhysicsBody,
    left_wall: PhysicsBody,
    right_wall: PhysicsBody,
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}

impl Basket {
    pub fn new() -> Self {
        let wall = || {
            PhysicsBody::new(ShapeDef::bottom_centered_rectangle(
                BASKET_SIZE / 10.0,
                4.0 * BASKET_SIZE / 5.0,
            ))
        };
        Self {
            position: Vec2::ZERO,
            direction: Vec2::new(0.0, 5.0),
            timer: LAUNCH_DELAY,
            counting: false,
            launcher: PhysicsBody::new(ShapeDef::bottom_centered_rectangle(
                BASKET_SIZE,
                BASKET_SIZE / 5.0,
            )),
            left_wall: wall(),
            right_wall: wall(),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Velocity given to the contents at launch.
    pub fn direction(mut self, x: f32, y: f32) -> Self {
        self.direction = Vec2::new(x, y);
        self
    }

    pub fn is_counting(&self) -> bool {
        self.counting
    }

    fn rearm(&mut self) {
        self.counting = false;
        self.timer = LAUNCH_DELAY;
    }
}

impl Component for Basket {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) {
        let wall_offset = Vec2::new(9.0 * BASKET_SIZE / 20.0, BASKET_SIZE / 5.0);
        self.launcher.set_initial_position(self.position);
        self.left_wall
            .set_initial_position(self.position + Vec2::new(-wall_offset.x, wall_offset.y));
        self.right_wall
            .set_initial_position(self.position + wall_offset);
        self.left_wall.install(ctx.world);
        self.right_wall.install(ctx.world);
        self.launcher.install(ctx.world);
        if let Some(collider) = self.launcher.collider() {
            ctx.contacts.register(collider, ctx.id);
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if !self.counting {
            return;
        }
        self.timer -= ctx.elapsed;
        if self.timer > 0.0 {
            return;
        }
        if let Some(collider) = self.launcher.collider() {
            let contents = ctx.world.touching(collider);
            for body in contents {
                ctx.world.set_linear_velocity(body, self.direction);
            }
        }
        tracing::debug!(direction = ?self.direction, "basket launched");
        self.rearm();
    }

    fn draw(&self, _ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        let outline = ShapeDef::bottom_centered_rectangle(BASKET_SIZE, BASKET_SIZE);
        outline.draw(canvas, self.position, 0.0, Color::TAN);
        outline.stroke(canvas, self.position, 0.0, Color::BROWN, 2.0);
    }

    fn reset(&mut self) {
        self.rearm();
    }

    fn begin_contact(&mut self, _contact: &Contact) {
        self.counting = true;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
