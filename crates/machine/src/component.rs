//! # Component Model
//!
//! Every machine part implements [`Component`] over a fixed capability
//! set, defaulting what it does not need. Components never hold a
//! reference to their machine; the machine passes context structs into
//! the methods that need world, dispatcher, or rotation-graph access.

use std::any::Any;

use canvas::Canvas;
use glam::Vec2;
use rapier2d::prelude::ColliderHandle;

use crate::dispatch::ContactDispatcher;
use crate::physics::PhysicsWorld;
use crate::rotation::{RotationGraph, SinkId, SourceId};

/// Stable index of a component within its machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A contact-begin notification oriented for the receiving component:
/// `this` is the collider it registered, `other` is the one that hit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub this: ColliderHandle,
    pub other: ColliderHandle,
}

/// Passed to [`Component::attach`] when a component joins a machine and
/// again after every reset. The sole injection point for the physics
/// world: bodies are installed here and nowhere else.
pub struct AttachContext<'a> {
    pub world: &'a mut PhysicsWorld,
    pub contacts: &'a mut ContactDispatcher,
    pub rotation: &'a mut RotationGraph,
    pub id: ComponentId,
}

/// Passed to [`Component::update`] once per machine step.
pub struct UpdateContext<'a> {
    pub world: &'a mut PhysicsWorld,
    pub rotation: &'a mut RotationGraph,
    /// Machine time declared for this frame, in seconds.
    pub time: f32,
    /// Step length, in seconds.
    pub elapsed: f32,
}

/// Read-only view passed to [`Component::draw`].
pub struct DrawContext<'a> {
    pub world: &'a PhysicsWorld,
    pub rotation: &'a RotationGraph,
    pub components: &'a [Box<dyn Component>],
}

impl DrawContext<'_> {
    /// Typed view of another component, for purely visual references
    /// such as a pulley finding its belt peer.
    pub fn component<T: Any>(&self, id: ComponentId) -> Option<&T> {
        self.components.get(id.0)?.as_any().downcast_ref()
    }
}

/// One part of a machine.
///
/// Lifecycle: constructed and configured, added to a machine (attach),
/// then updated once per step and drawn on demand. Machine reset calls
/// `reset` followed by a fresh `attach`, so attach must tolerate being
/// called repeatedly; rotation records are allocated on the first call
/// only, physics bodies are re-installed every time.
pub trait Component: Any {
    /// Position in machine coordinates.
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Install physics bodies and register contact interest.
    fn attach(&mut self, _ctx: &mut AttachContext<'_>) {}

    /// Advance component state by `ctx.elapsed` seconds.
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) {}

    fn draw(&self, _ctx: &DrawContext<'_>, _canvas: &mut dyn Canvas) {}

    /// Restore construction-time state. The physics side is rebuilt by
    /// the attach that follows.
    fn reset(&mut self) {}

    /// A collider this component registered began touching something.
    fn begin_contact(&mut self, _contact: &Contact) {}

    /// Rotation this component exposes, 0 for parts that do not rotate.
    fn rotation(&self, _rotation: &RotationGraph) -> f32 {
        0.0
    }

    fn set_rotation(&mut self, _rotation: &mut RotationGraph, _value: f32) {}

    /// The rotation source this component drives, if any.
    fn source(&self) -> Option<SourceId> {
        None
    }

    /// The rotation sink this component consumes, if any.
    fn sink(&self) -> Option<SinkId> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}
