pub mod config;

use std::time::Duration;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use commandhub_physics::body::BodySnapshot;
use commandhub_physics::engine::{Bounds, Simulation};
use commandhub_physics::vec2::Vec2;

use config::HostConfig;

/// Commands sent from a UI or controller to the tick loop. They are
/// applied between ticks, never during one.
#[derive(Debug)]
pub enum SimCommand {
    /// Add one body, optionally at a spawn point (click-to-spawn).
    AddBody { hint: Option<Vec2> },
    /// Remove the most recently added body.
    RemoveLast,
    SetPaused(bool),
    SetGravityEnabled(bool),
    /// Clear and recreate the full body set.
    Reset { count: usize },
    /// Out-of-band arena resize (host window/container resize).
    SetBounds { width: f64, height: f64 },
    Stop,
}

/// Broadcasts from the tick loop to any renderer.
#[derive(Debug, Clone)]
pub enum SimBroadcast {
    /// msgpack-encoded `FrameMsg`. Uses `Bytes` for zero-copy cloning
    /// across subscriber channels.
    Frame(Bytes),
    /// The loop has exited.
    Stopped,
}

/// One settled tick's render state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameMsg {
    pub tick: u64,
    pub paused: bool,
    pub bodies: Vec<BodySnapshot>,
}

/// Spawn the simulation tick loop as a tokio task.
/// Returns the command sender and broadcast receiver.
pub fn spawn_sim_session(
    config: &HostConfig,
) -> (
    mpsc::UnboundedSender<SimCommand>,
    mpsc::UnboundedReceiver<SimBroadcast>,
    JoinHandle<()>,
) {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut sim = Simulation::new(
        config.preset().config(),
        Bounds::new(config.arena_width, config.arena_height),
        seed,
    );

    let count = config.body_count.clamp(1, config.max_bodies);
    if count != config.body_count {
        tracing::warn!(
            requested = config.body_count,
            clamped = count,
            "body_count outside [1, max_bodies], clamping"
        );
    }
    sim.initialize(count);
    tracing::info!(
        seed,
        bodies = count,
        preset = config.preset().name(),
        "Simulation session starting"
    );

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (broadcast_tx, broadcast_rx) = mpsc::unbounded_channel();

    let tick_interval = Duration::from_secs_f64(1.0 / config.tick_rate_hz);
    let max_bodies = config.max_bodies;

    let handle = tokio::spawn(async move {
        run_sim_loop(&mut sim, tick_interval, max_bodies, cmd_rx, broadcast_tx).await;
    });

    (cmd_tx, broadcast_rx, handle)
}

/// The tick loop: advance the simulation once per interval, broadcast a
/// frame after every tick (paused ticks still render), and apply queued
/// commands between ticks.
async fn run_sim_loop(
    sim: &mut Simulation,
    tick_interval: Duration,
    max_bodies: usize,
    mut cmd_rx: mpsc::UnboundedReceiver<SimCommand>,
    broadcast_tx: mpsc::UnboundedSender<SimBroadcast>,
) {
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut tick: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                sim.tick();
                tick += 1;

                let frame = FrameMsg {
                    tick,
                    paused: sim.is_paused(),
                    bodies: sim.snapshot(),
                };
                match rmp_serde::to_vec(&frame) {
                    Ok(data) => {
                        let _ = broadcast_tx.send(SimBroadcast::Frame(Bytes::from(data)));
                    },
                    Err(e) => tracing::error!(tick, error = %e, "Failed to encode frame"),
                }
            }
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SimCommand::AddBody { hint }) => {
                        if sim.body_count() >= max_bodies {
                            tracing::warn!(max_bodies, "Arena full, ignoring AddBody");
                        } else {
                            let id = sim.add_body(hint);
                            tracing::debug!(id, "Body added");
                        }
                    },
                    Some(SimCommand::RemoveLast) => {
                        // Keep the arena visually non-empty
                        if sim.body_count() <= 1 {
                            tracing::warn!("Refusing to remove the last body");
                        } else if let Some(id) = sim.remove_last() {
                            tracing::debug!(id, "Body removed");
                        }
                    },
                    Some(SimCommand::SetPaused(paused)) => {
                        sim.set_paused(paused);
                    },
                    Some(SimCommand::SetGravityEnabled(enabled)) => {
                        sim.set_gravity_enabled(enabled);
                    },
                    Some(SimCommand::Reset { count }) => {
                        if count == 0 || count > max_bodies {
                            tracing::warn!(count, max_bodies, "Reset count out of range, ignoring");
                        } else {
                            sim.reset(count);
                        }
                    },
                    Some(SimCommand::SetBounds { width, height }) => {
                        if width > 0.0 && height > 0.0 {
                            sim.set_bounds(width, height);
                        } else {
                            tracing::warn!(width, height, "Ignoring degenerate resize");
                        }
                    },
                    Some(SimCommand::Stop) | None => {
                        break;
                    },
                }
            }
        }
    }

    let _ = broadcast_tx.send(SimBroadcast::Stopped);
}
