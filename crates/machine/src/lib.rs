#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss, clippy::module_name_repetitions)]
//! # Machine Simulation Core
//!
//! A deterministic, frame-seekable simulation of Rube Goldberg style
//! contraptions. A [`Machine`] owns an ordered set of components (beams,
//! balls, motors, pulleys, conveyors, baskets, goals) layered over a
//! rigid-body physics world, plus a mechanical power-transmission graph
//! that moves rotation from producers to consumers independently of the
//! physics engine.
//!
//! The [`MachineSystem`] façade exposes a frame axis on top: ask for any
//! frame number and the system either advances incrementally or resets
//! and replays from zero, so the state at frame F is a pure function of
//! F, the layout, and the frame rate.

pub mod component;
pub mod components;
pub mod dispatch;
pub mod error;
pub mod layouts;
pub mod physics;
pub mod rotation;
pub mod shape;
pub mod simulation;
pub mod system;

pub use component::{AttachContext, Component, ComponentId, Contact, DrawContext, UpdateContext};
pub use error::MachineError;
pub use physics::{BodyKind, PhysicsBody, PhysicsWorld};
pub use rotation::{RotationGraph, SinkId, SourceId};
pub use shape::ShapeDef;
pub use simulation::{Machine, MachineSnapshot};
pub use system::MachineSystem;
