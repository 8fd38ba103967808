use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyColor, BodyId, BodySnapshot};
use crate::config::PhysicsConfig;
use crate::vec2::Vec2;

/// Minimum upward launch speed for hint spawns (click-to-spawn).
const LAUNCH_SPEED_MIN: f64 = 2.0;
/// Maximum upward launch speed for hint spawns.
const LAUNCH_SPEED_MAX: f64 = 6.0;

/// Rectangular arena bounds. Walls sit at x=0, x=width, y=0, y=height;
/// positive y points down, so y=height is the floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Panics unless both dimensions are positive and finite. Degenerate
    /// arenas are a programmer error.
    pub fn new(width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite(),
            "arena bounds must be positive and finite, got {width}x{height}"
        );
        Self { width, height }
    }
}

/// The bouncing-ball simulation.
///
/// Bodies are kept in insertion order; the pairwise collision pass walks
/// pairs in ascending insertion order so runs from the same seed produce
/// identical trajectories.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: PhysicsConfig,
    bounds: Bounds,
    bodies: Vec<Body>,
    paused: bool,
    gravity_enabled: bool,
    next_id: BodyId,
    rng: StdRng,
}

impl Simulation {
    /// Create an empty simulation. `seed` fixes the spawn RNG so whole
    /// runs are reproducible.
    pub fn new(config: PhysicsConfig, bounds: Bounds, seed: u64) -> Self {
        config.validate();
        Self {
            config,
            bounds,
            bodies: Vec::new(),
            paused: false,
            gravity_enabled: true,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the body set with `count` freshly randomized bodies.
    ///
    /// Spawn positions are biased to the upper half of the arena so
    /// gravity has work to do. A count of 0 leaves an empty simulation
    /// whose ticks are no-ops.
    pub fn initialize(&mut self, count: usize) {
        self.bodies.clear();
        for _ in 0..count {
            let body = self.random_body();
            self.bodies.push(body);
        }
    }

    /// Alias for `initialize`; clears and recreates the full set.
    pub fn reset(&mut self, count: usize) {
        self.initialize(count);
    }

    /// Append a body with explicit position, velocity, and radius.
    /// Useful for scripted scenes; the id and color are still assigned
    /// by the simulation.
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2, radius: f64) -> BodyId {
        let id = self.alloc_id();
        let color = self.random_color();
        self.bodies
            .push(Body::new(id, position, velocity, radius, color));
        id
    }

    /// Append one new body.
    ///
    /// With a hint, the body spawns at that point with an upward-biased
    /// launch velocity (click-to-spawn). The hint is not validated against
    /// the arena; a spawn slightly out of bounds is corrected by the next
    /// tick's wall pass. Without a hint, the spawn is fully randomized.
    pub fn add_body(&mut self, hint: Option<Vec2>) -> BodyId {
        match hint {
            Some(point) => {
                let radius = self.random_radius();
                let sx = self.config.spawn_speed_x;
                let velocity = Vec2::new(
                    self.rng.random_range(-sx..=sx),
                    -self.rng.random_range(LAUNCH_SPEED_MIN..=LAUNCH_SPEED_MAX),
                );
                self.spawn(point, velocity, radius)
            },
            None => {
                let body = self.random_body();
                let id = body.id;
                self.bodies.push(body);
                id
            },
        }
    }

    /// Remove the most recently added body. Returns its id, or `None`
    /// if the set was already empty.
    pub fn remove_last(&mut self) -> Option<BodyId> {
        self.bodies.pop().map(|b| b.id)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Toggle the gravity term of the integrator. Damping and collisions
    /// still apply while gravity is off.
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Out-of-band resize. Bodies are not rescaled or repositioned; the
    /// next tick's wall pass pushes any stray back inside.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::new(width, height);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Ordered render view. Owned data, so a renderer can never alias
    /// the simulation's mutable state.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(BodySnapshot::from).collect()
    }

    /// Advance every body by exactly one discrete step.
    ///
    /// Order is fixed: gravity, damping, Euler position update, and wall
    /// resolution per body; then the O(n²) pairwise pass in ascending
    /// insertion order; finally a containment clamp so collision
    /// correction never relocates a body outside the arena.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        let cfg = self.config.clone();
        let bounds = self.bounds;
        let gravity_on = self.gravity_enabled;

        for body in &mut self.bodies {
            if gravity_on {
                body.velocity.y += cfg.gravity;
            }
            body.velocity.x *= cfg.linear_damping;
            body.velocity.y *= cfg.linear_damping;
            body.position.x += body.velocity.x;
            body.position.y += body.velocity.y;
            Self::collide_walls(body, bounds, cfg.restitution);
        }

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (head, tail) = self.bodies.split_at_mut(j);
                Self::resolve_pair(&mut head[i], &mut tail[0], cfg.restitution);
            }
        }

        for body in &mut self.bodies {
            Self::contain(body, bounds);
        }
    }

    fn alloc_id(&mut self) -> BodyId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn random_color(&mut self) -> BodyColor {
        BodyColor::PALETTE[self.rng.random_range(0..BodyColor::PALETTE.len())]
    }

    fn random_radius(&mut self) -> f64 {
        if self.config.radius_max > self.config.radius_min {
            self.rng
                .random_range(self.config.radius_min..self.config.radius_max)
        } else {
            self.config.radius_min
        }
    }

    fn random_body(&mut self) -> Body {
        let radius = self.random_radius();
        let x_span = (self.bounds.width - 2.0 * radius).max(0.0);
        let position = Vec2::new(
            radius + self.rng.random_range(0.0..=x_span),
            radius + self.rng.random_range(0.0..=self.bounds.height / 2.0),
        );
        let sx = self.config.spawn_speed_x;
        let sy = self.config.spawn_speed_y;
        let velocity = Vec2::new(
            self.rng.random_range(-sx..=sx),
            self.rng.random_range(-sy..=sy),
        );
        let id = self.alloc_id();
        let color = self.random_color();
        Body::new(id, position, velocity, radius, color)
    }

    /// Per-axis wall check: clamp the center back inside and reflect the
    /// axis velocity scaled by restitution.
    fn collide_walls(body: &mut Body, bounds: Bounds, restitution: f64) {
        if body.position.x - body.radius < 0.0 {
            body.position.x = body.radius;
            body.velocity.x = -body.velocity.x * restitution;
        } else if body.position.x + body.radius > bounds.width {
            body.position.x = bounds.width - body.radius;
            body.velocity.x = -body.velocity.x * restitution;
        }

        if body.position.y - body.radius < 0.0 {
            body.position.y = body.radius;
            body.velocity.y = -body.velocity.y * restitution;
        } else if body.position.y + body.radius > bounds.height {
            body.position.y = bounds.height - body.radius;
            body.velocity.y = -body.velocity.y * restitution;
        }
    }

    /// Impulse-based resolution for one unordered pair.
    ///
    /// Coincident centers are skipped entirely (transient, self-correcting,
    /// and the normal would divide by zero). Separating pairs skip the
    /// impulse but still get the positional de-overlap.
    fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64) {
        let dx = b.position.x - a.position.x;
        let dy = b.position.y - a.position.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let min_distance = a.radius + b.radius;

        if distance >= min_distance || distance == 0.0 {
            return;
        }

        // Unit normal from a to b
        let nx = dx / distance;
        let ny = dy / distance;

        // Relative velocity along the normal; positive means approaching
        let dvn = (a.velocity.x - b.velocity.x) * nx + (a.velocity.y - b.velocity.y) * ny;

        if dvn > 0.0 {
            let impulse = -(1.0 + restitution) * dvn / (1.0 / a.mass + 1.0 / b.mass);
            a.velocity.x += impulse * nx / a.mass;
            a.velocity.y += impulse * ny / a.mass;
            b.velocity.x -= impulse * nx / b.mass;
            b.velocity.y -= impulse * ny / b.mass;
        }

        // De-overlap so the pair ends exactly touching
        let half_overlap = (min_distance - distance) / 2.0;
        a.position.x -= half_overlap * nx;
        a.position.y -= half_overlap * ny;
        b.position.x += half_overlap * nx;
        b.position.y += half_overlap * ny;
    }

    /// Position-only clamp run after the pair pass, so de-overlapping
    /// never pushes a body through a wall.
    fn contain(body: &mut Body, bounds: Bounds) {
        let r = body.radius;
        if bounds.width >= 2.0 * r {
            body.position.x = body.position.x.clamp(r, bounds.width - r);
        } else {
            body.position.x = bounds.width / 2.0;
        }
        if bounds.height >= 2.0 * r {
            body.position.y = body.position.y.clamp(r, bounds.height - r);
        } else {
            body.position.y = bounds.height / 2.0;
        }
    }
}
