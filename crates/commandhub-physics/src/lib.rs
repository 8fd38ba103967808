pub mod body;
pub mod config;
pub mod engine;
pub mod preset;
pub mod vec2;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::config::PhysicsConfig;
    use crate::engine::{Bounds, Simulation};

    /// Default test arena, large enough that the biggest spawnable body
    /// fits with room to move.
    pub const TEST_WIDTH: f64 = 800.0;
    pub const TEST_HEIGHT: f64 = 500.0;

    /// Create an empty simulation with default tuning and a fixed seed.
    pub fn make_sim(seed: u64) -> Simulation {
        Simulation::new(
            PhysicsConfig::default(),
            Bounds::new(TEST_WIDTH, TEST_HEIGHT),
            seed,
        )
    }

    /// Create an empty simulation with explicit tuning and a fixed seed.
    pub fn make_sim_with(config: PhysicsConfig, seed: u64) -> Simulation {
        Simulation::new(config, Bounds::new(TEST_WIDTH, TEST_HEIGHT), seed)
    }

    /// A tuning with every dissipative term switched off: no gravity,
    /// no damping, perfectly elastic bounces.
    pub fn lossless_config() -> PhysicsConfig {
        PhysicsConfig {
            gravity: 0.0,
            linear_damping: 1.0,
            restitution: 1.0,
            ..PhysicsConfig::default()
        }
    }

    /// Advance the simulation by `n` ticks.
    pub fn run_ticks(sim: &mut Simulation, n: usize) {
        for _ in 0..n {
            sim.tick();
        }
    }

    /// Total momentum (mass-weighted velocity sum) over all bodies.
    pub fn total_momentum(sim: &Simulation) -> (f64, f64) {
        sim.bodies().iter().fold((0.0, 0.0), |(px, py), b| {
            (px + b.mass * b.velocity.x, py + b.mass * b.velocity.y)
        })
    }
}
