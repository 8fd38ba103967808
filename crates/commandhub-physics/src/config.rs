use serde::{Deserialize, Serialize};

/// Gravity acceleration per tick (positive y is down).
pub const GRAVITY: f64 = 0.5;
/// Per-tick multiplicative velocity decay, models air resistance.
pub const LINEAR_DAMPING: f64 = 0.99;
/// Fraction of normal velocity retained after a bounce.
pub const RESTITUTION: f64 = 0.8;
/// Smallest radius a spawned body can get.
pub const RADIUS_MIN: f64 = 15.0;
/// Largest radius a spawned body can get.
pub const RADIUS_MAX: f64 = 40.0;
/// Maximum |vx| at randomized spawn.
pub const SPAWN_SPEED_X: f64 = 5.0;
/// Maximum |vy| at randomized spawn.
pub const SPAWN_SPEED_Y: f64 = 2.5;

/// Configurable physics tuning, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f64,
    pub linear_damping: f64,
    pub restitution: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub spawn_speed_x: f64,
    pub spawn_speed_y: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            linear_damping: LINEAR_DAMPING,
            restitution: RESTITUTION,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            spawn_speed_x: SPAWN_SPEED_X,
            spawn_speed_y: SPAWN_SPEED_Y,
        }
    }
}

impl PhysicsConfig {
    /// Load tuning from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("COMMANDHUB_PHYSICS_CONFIG")
            .unwrap_or_else(|_| "config/physics.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<PhysicsConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    PhysicsConfig::default()
                },
            },
            Err(_) => PhysicsConfig::default(),
        }
    }

    /// Assert that the tuning is usable. A nonsensical tuning is a
    /// programmer error, so this fails fast rather than clamping.
    pub fn validate(&self) {
        assert!(
            self.restitution > 0.0 && self.restitution <= 1.0,
            "restitution must be in (0, 1], got {}",
            self.restitution
        );
        assert!(
            self.linear_damping > 0.0 && self.linear_damping <= 1.0,
            "linear_damping must be in (0, 1], got {}",
            self.linear_damping
        );
        assert!(
            self.radius_min > 0.0 && self.radius_max >= self.radius_min,
            "radius range must satisfy 0 < min <= max, got [{}, {}]",
            self.radius_min,
            self.radius_max
        );
        assert!(
            self.spawn_speed_x >= 0.0 && self.spawn_speed_y >= 0.0,
            "spawn speed bounds must be non-negative"
        );
        assert!(self.gravity.is_finite(), "gravity must be finite");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_values() {
        let cfg = PhysicsConfig::default();
        assert_eq!(cfg.gravity, 0.5);
        assert_eq!(cfg.linear_damping, 0.99);
        assert_eq!(cfg.restitution, 0.8);
        assert_eq!(cfg.radius_min, 15.0);
        assert_eq!(cfg.radius_max, 40.0);
    }

    #[test]
    fn default_tuning_validates() {
        PhysicsConfig::default().validate();
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let cfg: PhysicsConfig = toml::from_str("restitution = 0.85\ngravity = 0.3\n").unwrap();
        assert_eq!(cfg.restitution, 0.85);
        assert_eq!(cfg.gravity, 0.3);
        assert_eq!(cfg.linear_damping, LINEAR_DAMPING);
        assert_eq!(cfg.radius_max, RADIUS_MAX);
    }

    #[test]
    #[should_panic(expected = "restitution")]
    fn zero_restitution_rejected() {
        let cfg = PhysicsConfig {
            restitution: 0.0,
            ..PhysicsConfig::default()
        };
        cfg.validate();
    }

    #[test]
    #[should_panic(expected = "radius range")]
    fn inverted_radius_range_rejected() {
        let cfg = PhysicsConfig {
            radius_min: 40.0,
            radius_max: 15.0,
            ..PhysicsConfig::default()
        };
        cfg.validate();
    }
}
