use serde::{Deserialize, Serialize};

use crate::vec2::Vec2;

/// Unique identifier for a body in the simulation.
pub type BodyId = u64;

/// Display color assigned to a body at creation. Cosmetic only, no
/// effect on physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for BodyColor {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}

impl BodyColor {
    /// Predefined palette bodies are colored from at spawn.
    pub const PALETTE: &[BodyColor] = &[
        BodyColor {
            r: 59,
            g: 130,
            b: 246,
        }, // Blue
        BodyColor {
            r: 239,
            g: 68,
            b: 68,
        }, // Red
        BodyColor {
            r: 16,
            g: 185,
            b: 129,
        }, // Green
        BodyColor {
            r: 245,
            g: 158,
            b: 11,
        }, // Amber
        BodyColor {
            r: 139,
            g: 92,
            b: 246,
        }, // Purple
        BodyColor {
            r: 236,
            g: 72,
            b: 153,
        }, // Pink
        BodyColor {
            r: 6,
            g: 182,
            b: 212,
        }, // Cyan
        BodyColor {
            r: 249,
            g: 115,
            b: 22,
        }, // Orange
    ];
}

/// A single simulated ball.
///
/// `radius`, `mass`, and `color` are fixed for the body's lifetime; only
/// `position` and `velocity` mutate per tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    /// Area-proportional mass, `radius^2`, computed once at creation.
    pub mass: f64,
    pub color: BodyColor,
}

impl Body {
    /// Build a body with its mass derived from the radius.
    ///
    /// Panics if `radius` is not strictly positive. A zero or negative
    /// radius is a programmer error, not a recoverable state.
    pub fn new(id: BodyId, position: Vec2, velocity: Vec2, radius: f64, color: BodyColor) -> Self {
        assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            id,
            position,
            velocity,
            radius,
            mass: radius * radius,
            color,
        }
    }
}

/// Read-only render view of one body, safe to hand to a renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: BodyColor,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            x: body.position.x,
            y: body.position.y,
            radius: body.radius,
            color: body.color,
        }
    }
}
