use serde::Deserialize;

use commandhub_physics::preset::SimPreset;

/// Host configuration, loaded from `commandhub.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Simulation tick rate in Hz.
    pub tick_rate_hz: f64,
    /// Arena width in render units.
    pub arena_width: f64,
    /// Arena height in render units.
    pub arena_height: f64,
    /// Bodies created at startup.
    pub body_count: usize,
    /// Upper bound on bodies the host will allow (the classic ball-count
    /// field capped at 50).
    pub max_bodies: usize,
    /// Tuning preset name (classic, bouncy, low-gravity).
    pub preset: String,
    /// Fixed RNG seed; omit for a fresh arrangement every run.
    pub seed: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            arena_width: 800.0,
            arena_height: 500.0,
            body_count: 5,
            max_bodies: 50,
            preset: "classic".to_string(),
            seed: None,
        }
    }
}

impl HostConfig {
    /// Validate configuration, exiting on values the engine would panic on.
    pub fn validate(&self) {
        if self.tick_rate_hz <= 0.0 || !self.tick_rate_hz.is_finite() {
            tracing::error!(rate = self.tick_rate_hz, "tick_rate_hz must be > 0");
            std::process::exit(1);
        }
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            tracing::error!(
                width = self.arena_width,
                height = self.arena_height,
                "arena dimensions must be > 0"
            );
            std::process::exit(1);
        }
        if self.max_bodies == 0 {
            tracing::error!("max_bodies must be > 0");
            std::process::exit(1);
        }
        if SimPreset::from_name(&self.preset).is_none() {
            tracing::warn!(preset = %self.preset, "Unknown preset, falling back to classic");
        }
    }

    /// Resolve the configured preset, defaulting to classic for unknown
    /// names.
    pub fn preset(&self) -> SimPreset {
        SimPreset::from_name(&self.preset).unwrap_or_default()
    }

    /// Load config from `commandhub.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("commandhub.toml") {
            Ok(content) => match toml::from_str::<HostConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from commandhub.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse commandhub.toml: {e}, using defaults");
                    HostConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No commandhub.toml found, using defaults");
                HostConfig::default()
            },
        };

        if let Ok(val) = std::env::var("COMMANDHUB_TICK_RATE")
            && let Ok(n) = val.parse::<f64>()
        {
            config.tick_rate_hz = n;
        }
        if let Ok(val) = std::env::var("COMMANDHUB_BODY_COUNT")
            && let Ok(n) = val.parse::<usize>()
        {
            config.body_count = n;
        }
        if let Ok(val) = std::env::var("COMMANDHUB_PRESET")
            && !val.is_empty()
        {
            config.preset = val;
        }
        if let Ok(val) = std::env::var("COMMANDHUB_SEED")
            && let Ok(n) = val.parse::<u64>()
        {
            config.seed = Some(n);
        }

        config
    }
}
