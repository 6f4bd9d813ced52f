//! # Machine
//!
//! One assembled contraption: an ordered component list plus the three
//! shared structures the components work against, the physics world,
//! the contact dispatcher, and the rotation graph. Update order is
//! insertion order, and so is draw order, which is what lets curtains
//! added last cover the rest.

use std::any::Any;

use canvas::Canvas;

use crate::component::{
    AttachContext, Component, ComponentId, DrawContext, UpdateContext,
};
use crate::components::Goal;
use crate::dispatch::ContactDispatcher;
use crate::error::MachineError;
use crate::physics::PhysicsWorld;
use crate::rotation::RotationGraph;

/// Observable state of a machine at one instant, for comparing runs.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSnapshot {
    pub time: f32,
    pub score: i32,
    pub poses: Vec<(f32, f32, f32)>,
    pub rotations: Vec<f32>,
}

#[derive(Default)]
pub struct Machine {
    components: Vec<Box<dyn Component>>,
    world: PhysicsWorld,
    contacts: ContactDispatcher,
    rotation: RotationGraph,
    time: f32,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component, attaching it to this machine's world. Returns
    /// the id used for wiring and lookups.
    pub fn add(&mut self, component: impl Component) -> ComponentId {
        let id = ComponentId(self.components.len());
        let mut component = component;
        let mut ctx = AttachContext {
            world: &mut self.world,
            contacts: &mut self.contacts,
            rotation: &mut self.rotation,
            id,
        };
        component.attach(&mut ctx);
        self.components.push(Box::new(component));
        id
    }

    /// Wire `source`'s rotation output into `sink`'s input with the
    /// given transmission ratio.
    pub fn connect(
        &mut self,
        source: ComponentId,
        sink: ComponentId,
        ratio: f32,
    ) -> Result<(), MachineError> {
        let from = self
            .components
            .get(source.0)
            .ok_or(MachineError::UnknownComponent(source))?
            .source()
            .ok_or(MachineError::NoSource(source))?;
        let to = self
            .components
            .get(sink.0)
            .ok_or(MachineError::UnknownComponent(sink))?
            .sink()
            .ok_or(MachineError::NoSink(sink))?;
        self.rotation.connect(from, to, ratio)
    }

    /// Advance the machine by `elapsed` seconds: every component in
    /// insertion order, then one physics step, then contact delivery.
    pub fn update(&mut self, elapsed: f32) {
        for component in &mut self.components {
            let mut ctx = UpdateContext {
                world: &mut self.world,
                rotation: &mut self.rotation,
                time: self.time,
                elapsed,
            };
            component.update(&mut ctx);
        }
        self.world.step(elapsed);
        let events = self.world.drain_contacts();
        for event in &events {
            for (id, contact) in self.contacts.route(event) {
                if let Some(component) = self.components.get_mut(id.0) {
                    component.begin_contact(&contact);
                }
            }
        }
    }

    /// Throw away all accumulated state and rebuild the starting world.
    ///
    /// The component list and rotation wiring survive; the physics
    /// world is replaced outright and every component re-attaches into
    /// it in insertion order, which makes a reset-and-replay land on
    /// the exact trajectory of a fresh run.
    pub fn reset(&mut self) {
        self.world = PhysicsWorld::new();
        self.contacts.clear();
        self.rotation.reset();
        self.time = 0.0;
        for (index, component) in self.components.iter_mut().enumerate() {
            component.reset();
            let mut ctx = AttachContext {
                world: &mut self.world,
                contacts: &mut self.contacts,
                rotation: &mut self.rotation,
                id: ComponentId(index),
            };
            component.attach(&mut ctx);
        }
        tracing::debug!(components = self.components.len(), "machine reset");
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let ctx = DrawContext {
            world: &self.world,
            rotation: &self.rotation,
            components: &self.components,
        };
        for component in &self.components {
            component.draw(&ctx, canvas);
        }
    }

    /// Declare the machine time for the next update, in seconds.
    pub fn set_current_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn current_time(&self) -> f32 {
        self.time
    }

    /// Typed view of a component by id.
    pub fn component<T: Any>(&self, id: ComponentId) -> Option<&T> {
        self.components.get(id.0)?.as_any().downcast_ref()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn rotation_graph(&self) -> &RotationGraph {
        &self.rotation
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Sum of every goal's scoreboard.
    pub fn total_score(&self) -> i32 {
        self.components
            .iter()
            .filter_map(|component| component.as_any().downcast_ref::<Goal>())
            .map(Goal::score)
            .sum()
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            time: self.time,
            score: self.total_score(),
            poses: self.world.poses(),
            rotations: self.rotation.rotations(),
        }
    }
}
