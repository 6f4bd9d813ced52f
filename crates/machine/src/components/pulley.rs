//! # Pulley
//!
//! A wheel that relays rotation from its sink to its own source, so
//! power can hop from shaft to shaft. A pulley may also carry a belt
//! to a partner pulley, which is purely visual; the mechanical ratio
//! lives on the rotation connection.

use std::any::Any;
use std::f32::consts::FRAC_PI_2;

use canvas::{Canvas, Color};
use glam::Vec2;

use crate::component::{AttachContext, Component, ComponentId, DrawContext, UpdateContext};
use crate::rotation::{RotationGraph, SinkId, SourceId};
use crate::shape::ShapeDef;

pub struct Pulley {
    radius: f32,
    position: Vec2,
    color: Color,
    source: Option<SourceId>,
    sink: Option<SinkId>,
    belt: Option<ComponentId>,
}

impl Pulley {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            position: Vec2::ZERO,
            color: Color::GOLD,
            source: None,
            sink: None,
            belt: None,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Draw a belt between this pulley and `other`. Only one side of a
    /// pair needs the link.
    pub fn belt_to(mut self, other: ComponentId) -> Self {
        self.belt = Some(other);
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn draw_belt(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        let Some(peer) = self.belt else {
            return;
        };
        let Some(other) = ctx.component::<Pulley>(peer) else {
            return;
        };
        let delta = other.position - self.position;
        let distance = delta.length();
        if distance <= f32::EPSILON {
            return;
        }
        // External tangent lines between the two wheel circles.
        let theta = delta.y.atan2(delta.x);
        let phi = ((other.radius - self.radius) / distance)
            .clamp(-1.0, 1.0)
            .asin();
        for beta in [theta + phi + FRAC_PI_2, theta - phi - FRAC_PI_2] {
            let along = Vec2::new(beta.cos(), beta.sin());
            canvas.line(
                self.position + self.radius * along,
                other.position + other.radius * along,
                Color::BLACK,
                1.0,
            );
        }
    }
}

impl Component for Pulley {
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
        if self.sink.is_none() {
            self.sink = Some(ctx.rotation.add_sink(ctx.id));
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let (Some(source), Some(sink)) = (self.source, self.sink) else {
            return;
        };
        let rotation = ctx.rotation.sink_rotation(sink);
        ctx.rotation.set_rotation(source, rotation);
    }

    fn draw(&self, ctx: &DrawContext<'_>, canvas: &mut dyn Canvas) {
        self.draw_belt(ctx, canvas);

        let rotation = self.rotation(ctx.rotation);
        let disc = ShapeDef::circle(self.radius);
        disc.draw(canvas, self.position, rotation, self.color);
        disc.stroke(canvas, self.position, rotation, Color::BLACK, 1.0);
        canvas.push();
        canvas.translate(self.position);
        canvas.rotate(rotation);
        canvas.line(
            Vec2::ZERO,
            Vec2::new(self.radius, 0.0),
            Color::BLACK,
            1.0,
        );
        canvas.pop();
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

    fn sink(&self) -> Option<SinkId> {
        self.sink
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
