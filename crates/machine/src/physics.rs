//! # Physics World
//!
//! Wrapper around the rapier2d pipeline. A machine owns exactly one
//! world; reset discards it wholesale and re-installs every body, so
//! handles held by components are only valid until the next reset and
//! are refreshed on every attach.
//!
//! Contact behavior that would otherwise need per-step solver
//! callbacks is declarative here: colliders can be flagged pass-through
//! (response suppressed, begin events still fire) or given a surface
//! speed (written into the solver contacts as a tangent velocity).

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use glam::Vec2;
use rapier2d::prelude::*;

use crate::shape::ShapeDef;

/// Downward gravity applied to every machine world.
pub const GRAVITY: f32 = -9.8;

/// Velocity solver iterations per step.
pub const VELOCITY_ITERATIONS: usize = 6;

/// Position stabilization iterations per step.
pub const POSITION_ITERATIONS: usize = 2;

/// One contact-begin event drained after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub first: ColliderHandle,
    pub second: ColliderHandle,
}

/// Collects begin events raised while the pipeline steps.
#[derive(Default)]
struct ContactLog {
    started: Mutex<Vec<ContactEvent>>,
}

impl EventHandler for ContactLog {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let CollisionEvent::Started(first, second, _) = event {
            let Ok(mut started) = self.started.lock() else {
                return;
            };
            started.push(ContactEvent { first, second });
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// Per-collider contact behavior consulted by the solver mid-step.
#[derive(Debug, Default)]
struct ContactControls {
    surface_speed: HashMap<ColliderHandle, f32>,
    pass_through: HashSet<ColliderHandle>,
}

impl PhysicsHooks for ContactControls {
    fn filter_contact_pair(&self, _context: &PairFilterContext) -> Option<SolverFlags> {
        Some(SolverFlags::COMPUTE_IMPULSES)
    }

    fn filter_intersection_pair(&self, _context: &PairFilterContext) -> bool {
        true
    }

    fn modify_solver_contacts(&self, context: &mut ContactModificationContext) {
        if self.pass_through.contains(&context.collider1)
            || self.pass_through.contains(&context.collider2)
        {
            context.solver_contacts.clear();
            return;
        }
        let speed = self
            .surface_speed
            .get(&context.collider1)
            .or_else(|| self.surface_speed.get(&context.collider2));
        if let Some(&speed) = speed {
            for contact in context.solver_contacts.iter_mut() {
                contact.tangent_velocity.x = speed;
            }
        }
    }
}

/// The rigid-body world owned by one machine.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    controls: ContactControls,
    events: ContactLog,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        let mut parameters = IntegrationParameters::default();
        parameters.max_velocity_iterations = VELOCITY_ITERATIONS;
        parameters.max_stabilization_iterations = POSITION_ITERATIONS;
        Self {
            gravity: vector![0.0, GRAVITY],
            parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            controls: ContactControls::default(),
            events: ContactLog::default(),
        }
    }

    /// Advance the world by one step of `elapsed` seconds.
    pub fn step(&mut self, elapsed: f32) {
        self.parameters.dt = elapsed;
        self.pipeline.step(
            &self.gravity,
            &self.parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &self.controls,
            &self.events,
        );
    }

    /// Take every contact-begin event raised since the last drain.
    pub fn drain_contacts(&mut self) -> Vec<ContactEvent> {
        match self.events.started.lock() {
            Ok(mut started) => std::mem::take(&mut *started),
            Err(_) => Vec::new(),
        }
    }

    /// Give `collider` a conveyor-style tangential surface speed.
    pub fn set_surface_speed(&mut self, collider: ColliderHandle, speed: f32) {
        self.controls.surface_speed.insert(collider, speed);
    }

    /// Suppress collision response for contacts involving `collider`.
    pub fn set_pass_through(&mut self, collider: ColliderHandle) {
        self.controls.pass_through.insert(collider);
    }

    /// Bodies currently touching `collider` through an active contact.
    pub fn touching(&self, collider: ColliderHandle) -> Vec<RigidBodyHandle> {
        let mut touching = Vec::new();
        for pair in self.narrow_phase.contacts_with(collider) {
            if !pair.has_any_active_contact {
                continue;
            }
            let other = if pair.collider1 == collider {
                pair.collider2
            } else {
                pair.collider1
            };
            if let Some(body) = self.colliders.get(other).and_then(Collider::parent) {
                touching.push(body);
            }
        }
        touching
    }

    pub fn set_linear_velocity(&mut self, body: RigidBodyHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(body) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    pub fn linear_velocity(&self, body: RigidBodyHandle) -> Vec2 {
        self.bodies.get(body).map_or(Vec2::ZERO, |body| {
            let velocity = body.linvel();
            Vec2::new(velocity.x, velocity.y)
        })
    }

    pub fn set_angular_velocity(&mut self, body: RigidBodyHandle, velocity: f32) {
        if let Some(body) = self.bodies.get_mut(body) {
            body.set_angvel(velocity, true);
        }
    }

    pub fn angular_velocity(&self, body: RigidBodyHandle) -> f32 {
        self.bodies.get(body).map_or(0.0, RigidBody::angvel)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// World pose of every body in arena order as `(x, y, angle)`.
    pub fn poses(&self) -> Vec<(f32, f32, f32)> {
        self.bodies
            .iter()
            .map(|(_, body)| {
                let translation = body.translation();
                (translation.x, translation.y, body.rotation().angle())
            })
            .collect()
    }
}

/// Body kind for an installed rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    /// Never moves. Beams, floors, cages.
    #[default]
    Static,
    /// Fully force- and collision-driven. Balls, dominoes.
    Dynamic,
    /// Velocity is commanded each step; ignores forces. Driven arms.
    Kinematic,
}

/// A shape plus the rigid body it installs into a machine's world.
///
/// Construction declares the shape, kind, material, and initial pose;
/// nothing touches the physics engine until [`PhysicsBody::install`],
/// which the owning component calls from its attach.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    shape: ShapeDef,
    kind: BodyKind,
    initial_position: Vec2,
    density: f32,
    friction: f32,
    restitution: f32,
    body: Option<RigidBodyHandle>,
    collider: Option<ColliderHandle>,
}

impl PhysicsBody {
    pub fn new(shape: ShapeDef) -> Self {
        Self {
            shape,
            kind: BodyKind::Static,
            initial_position: Vec2::ZERO,
            density: 1.0,
            friction: 0.5,
            restitution: 0.5,
            body: None,
            collider: None,
        }
    }

    pub fn set_dynamic(&mut self) {
        self.kind = BodyKind::Dynamic;
    }

    pub fn set_kinematic(&mut self) {
        self.kind = BodyKind::Kinematic;
    }

    pub fn set_initial_position(&mut self, position: Vec2) {
        self.initial_position = position;
    }

    pub fn set_material(&mut self, density: f32, friction: f32, restitution: f32) {
        self.density = density;
        self.friction = friction;
        self.restitution = restitution;
    }

    pub fn shape(&self) -> &ShapeDef {
        &self.shape
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn initial_position(&self) -> Vec2 {
        self.initial_position
    }

    pub fn body(&self) -> Option<RigidBodyHandle> {
        self.body
    }

    pub fn collider(&self) -> Option<ColliderHandle> {
        self.collider
    }

    /// Create the rigid body and collider in `world` at the initial
    /// pose, replacing any handles from a previous world.
    pub fn install(&mut self, world: &mut PhysicsWorld) {
        let builder = match self.kind {
            BodyKind::Static => RigidBodyBuilder::fixed(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::Kinematic => RigidBodyBuilder::kinematic_velocity_based(),
        };
        let body = world.bodies.insert(
            builder.translation(vector![self.initial_position.x, self.initial_position.y]),
        );
        self.body = Some(body);
        self.collider = match collider_for(&self.shape) {
            Some(collider) => {
                let collider = collider
                    .density(self.density)
                    .friction(self.friction)
                    .restitution(self.restitution)
                    .active_events(ActiveEvents::COLLISION_EVENTS)
                    .active_hooks(ActiveHooks::MODIFY_SOLVER_CONTACTS);
                Some(world.colliders.insert_with_parent(collider, body, &mut world.bodies))
            }
            None => {
                tracing::warn!("degenerate polygon, body installed without a collider");
                None
            }
        };
    }

    /// World position, or the initial position before installation.
    pub fn position(&self, world: &PhysicsWorld) -> Vec2 {
        self.body
            .and_then(|handle| world.bodies.get(handle))
            .map_or(self.initial_position, |body| {
                let translation = body.translation();
                Vec2::new(translation.x, translation.y)
            })
    }

    /// World rotation angle in radians, 0 before installation.
    pub fn rotation(&self, world: &PhysicsWorld) -> f32 {
        self.body
            .and_then(|handle| world.bodies.get(handle))
            .map_or(0.0, |body| body.rotation().angle())
    }

    pub fn set_angular_velocity(&self, world: &mut PhysicsWorld, velocity: f32) {
        if let Some(handle) = self.body {
            world.set_angular_velocity(handle, velocity);
        }
    }

    pub fn linear_velocity(&self, world: &PhysicsWorld) -> Vec2 {
        self.body
            .map_or(Vec2::ZERO, |handle| world.linear_velocity(handle))
    }

    pub fn angular_velocity(&self, world: &PhysicsWorld) -> f32 {
        self.body
            .map_or(0.0, |handle| world.angular_velocity(handle))
    }

    /// Draw the shape at the installed pose.
    pub fn draw(&self, world: &PhysicsWorld, canvas: &mut dyn canvas::Canvas, color: canvas::Color) {
        self.shape
            .draw(canvas, self.position(world), self.rotation(world), color);
    }
}

fn collider_for(shape: &ShapeDef) -> Option<ColliderBuilder> {
    match shape {
        ShapeDef::Rect { origin, size } => {
            let half = *size * 0.5;
            Some(
                ColliderBuilder::cuboid(half.x, half.y)
                    .translation(vector![origin.x + half.x, origin.y + half.y]),
            )
        }
        ShapeDef::Polygon { points } => {
            let points: Vec<Point<Real>> =
                points.iter().map(|point| point![point.x, point.y]).collect();
            ColliderBuilder::convex_hull(&points)
        }
        ShapeDef::Circle { radius } => Some(ColliderBuilder::ball(*radius)),
    }
}
