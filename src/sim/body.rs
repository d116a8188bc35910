//! Rectangular bodies and their per-step integration
//!
//! Each body integrates itself with a single explicit Euler step, then
//! resolves against the floor. Bodies never interact with each other.

use super::force::Force;
use super::vector::Vector2D;
use crate::consts::*;

/// Log target for force application/consumption
pub const FORCE_LOG_TARGET: &str = "rectfall::forces";
/// Log target for per-step kinematic state
pub const STATE_LOG_TARGET: &str = "rectfall::state";

/// How a body reacts to hitting the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    /// Player-controlled; lands without bouncing
    Player,
    /// Free block; bounces with energy loss
    #[default]
    Block,
}

/// An axis-aligned rectangle body
#[derive(Debug, Clone)]
pub struct Rect {
    pub id: u32,
    pub kind: BodyKind,
    pub center: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub half_extents: Vector2D,
    /// Tracked but not simulated
    pub angle: f32,
    /// Tracked but not simulated
    pub torque: f32,
    mass: f32,
    inv_mass: f32,
    /// Set when the last update moved the body by at most `EPSILON`
    pub resting: bool,
    pub touching_floor: bool,
    forces: Vec<Force>,
}

impl Rect {
    /// Create a body from its top-left corner and size, with the default mass
    pub fn new(id: u32, kind: BodyKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::with_mass(id, kind, x, y, w, h, DEFAULT_MASS)
    }

    /// Create a body with an explicit mass
    ///
    /// `mass` must be positive; it cannot be changed afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn with_mass(id: u32, kind: BodyKind, x: f32, y: f32, w: f32, h: f32, mass: f32) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive, got {mass}");
        Self {
            id,
            kind,
            center: Vector2D::new(x + w / 2.0, y + h / 2.0),
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            half_extents: Vector2D::new(w / 2.0, h / 2.0),
            angle: 0.0,
            torque: 0.0,
            mass,
            inv_mass: 1.0 / mass,
            resting: false,
            touching_floor: false,
            forces: Vec::new(),
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Forces still waiting to contribute
    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Left edge
    pub fn x(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    /// Top edge
    pub fn y(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    pub fn w(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    pub fn h(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Queue a force and wake the body
    ///
    /// This is the only way a resting body starts moving again.
    pub fn apply_force(&mut self, force: Force) {
        log::debug!(
            target: FORCE_LOG_TARGET,
            "[Rect {}][apply_force][dir: {}, {}][time: {}]",
            self.id,
            force.direction.x,
            force.direction.y,
            force.remaining_time
        );
        self.forces.push(force);
        self.resting = false;
    }

    /// Advance the body by one step of length `dt` against a floor at `floor_y`
    pub fn update(&mut self, dt: f32, floor_y: f32) {
        if self.resting {
            return;
        }

        let id = self.id;
        let mut net = Vector2D::new(0.0, GRAVITY);
        self.forces.retain_mut(|force| {
            if !force.is_live() {
                log::debug!(target: FORCE_LOG_TARGET, "[Rect {id}][force_drop][time: {}]", force.remaining_time);
                return false;
            }
            log::debug!(
                target: FORCE_LOG_TARGET,
                "[Rect {id}][force_add][dir: {}, {}][time: {}]",
                force.direction.x,
                force.direction.y,
                force.remaining_time
            );
            net.add(force.direction);
            force.remaining_time -= dt;
            force.is_live()
        });

        let prev = Vector2D::copy(&self.center);

        self.acceleration = Vector2D::scaled(net, self.inv_mass);
        self.velocity
            .add(Vector2D::scaled(self.acceleration, dt))
            .scale(VELOCITY_DAMPING);
        self.center.add(Vector2D::scaled(self.velocity, dt));

        log::trace!(
            target: STATE_LOG_TARGET,
            "[{id}][update] acc: {}, {} vel: {}, {} pos: {}, {}",
            self.acceleration.x,
            self.acceleration.y,
            self.velocity.x,
            self.velocity.y,
            self.center.x,
            self.center.y
        );

        self.velocity.x *= HORIZONTAL_DAMPING;

        if self.bottom() >= floor_y {
            self.acceleration.y = 0.0;
            match self.kind {
                BodyKind::Player => self.velocity.y = 0.0,
                BodyKind::Block => self.velocity.y *= -FLOOR_RESTITUTION,
            }
            // TODO: time-of-collision; push the leftover motion back up instead of snapping
            self.center.y = floor_y - self.half_extents.y;
            self.touching_floor = true;
        } else {
            self.touching_floor = false;
        }

        let moved = Vector2D::difference(self.center, prev).length();
        if moved <= EPSILON {
            self.acceleration.zero();
            self.velocity.zero();
            self.resting = true;
        } else {
            self.resting = false;
        }
    }
}
