use tracing_subscriber::EnvFilter;

use commandhub_host::config::HostConfig;
use commandhub_host::{SimBroadcast, SimCommand, spawn_sim_session};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("CommandHub physics host starting");

    let config = HostConfig::load();
    config.validate();

    let (cmd_tx, mut broadcast_rx, handle) = spawn_sim_session(&config);

    // Headless: drain frames until Ctrl-C. A renderer would decode each
    // frame into its drawing surface instead.
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                let _ = cmd_tx.send(SimCommand::Stop);
                break;
            }
            msg = broadcast_rx.recv() => {
                match msg {
                    Some(SimBroadcast::Frame(data)) => {
                        tracing::trace!(bytes = data.len(), "frame");
                    },
                    Some(SimBroadcast::Stopped) | None => break,
                }
            }
        }
    }

    let _ = handle.await;
}
