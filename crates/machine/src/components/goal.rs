//! # Goal
//!
//! A basketball goal with a scoreboard. A thin target inside the net
//! scores two points per ball and lets the ball fall through; the
//! backboard post is solid.

use std::any::Any;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{AttachContext, Component, Contact, DrawContext};
use crate::physics::PhysicsBody;
use crate::shape::ShapeDef;

/// Drawn size of the whole goal. Not in the physics world.
const GOAL_SIZE: Vec2 = Vec2::new(65.0, 247.0);

/// Solid backboard and post footprint.
const POST_SIZE: Vec2 = Vec2::new(10.0, 250.0);

/// Scoring target inside the net.
const TARGET_SIZE: Vec2 = Vec2::new(20.0, 5.0);

/// Post center relative to the goal position.
const POST_OFFSET: Vec2 = Vec2::new(22.0, 0.0);

/// Target center relative to the goal position.
const TARGET_OFFSET: Vec2 = Vec2::new(-12.0, 165.0);

/// Scoreboard face, relative to the goal position.
const SCOREBOARD_ORIGIN: Vec2 = Vec2::new(5.0, 280.0);
const SCOREBOARD_SIZE: Vec2 = Vec2::new(30.0, 20.0);

/// Score text start, relative to the goal position.
const SCOREBOARD_TEXT: Vec2 = Vec2::new(9.0, 299.0);

const SCOREBOARD_BACKGROUND: Color = Color::rgb(24, 69, 59);
const SCOREBOARD_LINE_WIDTH: f32 = 3.0;
const SCOREBOARD_FONT_SIZE: f32 = 20.0;

/// Points awarded per scoring contact.
const POINTS_PER_BASKET: i32 = 2;

pub struct Goal {
    position: Vec2,
    score: i32,
    target: PhysicsBody,
    post: PhysicsBody,
}

impl Default for Goal {
    fn default() -> Self {
        Self::new()
    }
}

impl Goal {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            score: 0,
            target: PhysicsBody::new(ShapeDef::bottom_centered_rectangle(
                TARGET_SIZE.x,
                TARGET_SIZE.y,
            )),
            post: PhysicsBody::new(ShapeDef::bottom_centered_rectangle(POST_SIZE.x, POST_SIZE.y)),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

impl Component for Goal {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) {
        self.target.set_initial_position(self.position + TARGET_OFFSET);
        self.post.set_initial_position(self.position + POST_OFFSET);
        self.target.install(ctx.world);
        self.post.install(ctx.world);
        if let Some(collider) = self.target.collider() {
            ctx.contacts.register(collider, ctx.id);
            // Balls score on the way through, not by bouncing off.
            ctx.world.set_pass_through(collider);
        }
    }

    fn draw(&self, _ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        let net = ShapeDef::bottom_centered_rectangle(GOAL_SIZE.x, GOAL_SIZE.y);
        net.stroke(canvas, self.position, 0.0, Color::CRIMSON, 2.0);
        self.post.shape().draw(
            canvas,
            self.position + POST_OFFSET,
            0.0,
            Color::GRAY,
        );

        let face = ShapeDef::rectangle(0.0, 0.0, SCOREBOARD_SIZE.x, SCOREBOARD_SIZE.y);
        face.draw(
            canvas,
            self.position + SCOREBOARD_ORIGIN,
            0.0,
            SCOREBOARD_BACKGROUND,
        );
        face.stroke(
            canvas,
            self.position + SCOREBOARD_ORIGIN,
            0.0,
            Color::BLACK,
            SCOREBOARD_LINE_WIDTH,
        );

        let text = format!("{:02}", self.score);
        canvas.push();
        canvas.translate(self.position + SCOREBOARD_TEXT + Vec2::new(0.0, 3.0));
        // Text renders y-down while the machine draws y-up.
        canvas.scale(1.0, -1.0);
        canvas.text(&text, Vec2::ZERO, SCOREBOARD_FONT_SIZE, Color::WHITE);
        canvas.pop();
    }

    fn reset(&mut self) {
        self.score = 0;
    }

    fn begin_contact(&mut self, _contact: &Contact) {
        self.score += POINTS_PER_BASKET;
        tracing::debug!(score = self.score, "goal scored");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
