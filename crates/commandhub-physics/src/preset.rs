use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;

/// Named tuning presets.
///
/// A preset selects a full `PhysicsConfig` by name, so hosts can offer
/// distinct feels without carrying per-variant engine code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimPreset {
    /// The canonical tuning: gravity 0.5, damping 0.99, restitution 0.8.
    Classic,
    /// Livelier bounces.
    Bouncy,
    /// Moon-ish gravity, balls drift for a long time.
    LowGravity,
}

impl SimPreset {
    pub fn config(self) -> PhysicsConfig {
        match self {
            Self::Classic => PhysicsConfig::default(),
            Self::Bouncy => PhysicsConfig {
                restitution: 0.85,
                ..PhysicsConfig::default()
            },
            Self::LowGravity => PhysicsConfig {
                gravity: 0.15,
                linear_damping: 0.995,
                ..PhysicsConfig::default()
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Bouncy => "bouncy",
            Self::LowGravity => "low-gravity",
        }
    }

    /// Look up a preset by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::Classic),
            "bouncy" => Some(Self::Bouncy),
            "low-gravity" => Some(Self::LowGravity),
            _ => None,
        }
    }
}

impl Default for SimPreset {
    fn default() -> Self {
        Self::Classic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_matches_default_tuning() {
        assert_eq!(SimPreset::Classic.config(), PhysicsConfig::default());
    }

    #[test]
    fn every_preset_validates() {
        for preset in [SimPreset::Classic, SimPreset::Bouncy, SimPreset::LowGravity] {
            preset.config().validate();
        }
    }

    #[test]
    fn name_roundtrip() {
        for preset in [SimPreset::Classic, SimPreset::Bouncy, SimPreset::LowGravity] {
            assert_eq!(SimPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(SimPreset::from_name("turbo"), None);
    }

    #[test]
    fn bouncy_only_changes_restitution() {
        let bouncy = SimPreset::Bouncy.config();
        assert_eq!(bouncy.restitution, 0.85);
        assert_eq!(bouncy.gravity, PhysicsConfig::default().gravity);
    }
}
