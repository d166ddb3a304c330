//! # scenehubd — scenehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` from the configured filter
//! - Construct the cloud client selected by the `[cloud]` backend
//! - Construct the scene platform, injecting the cloud, the event bus and
//!   the account's selection store via port traits
//! - Build the axum router around the platform
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT) and tear the platform down
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use scenehub_adapter_http_axum::router;
use scenehub_adapter_http_axum::state::AppState;
use scenehub_adapter_roborock::RoborockCloudClient;
use scenehub_adapter_virtual::VirtualSceneCloud;
use scenehub_app::event_bus::InProcessEventBus;
use scenehub_app::ports::{Integration, SceneCloud};
use scenehub_app::selection_store::SelectionStore;
use scenehub_app::services::scene_platform::ScenePlatform;
use tracing_subscriber::EnvFilter;

use crate::config::{CloudBackend, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    match config.cloud.backend {
        CloudBackend::Virtual => {
            tracing::info!("using the virtual cloud");
            run(&config, VirtualSceneCloud::from_config(&config.virtual_cloud)).await
        }
        CloudBackend::Roborock => {
            let roborock = config.cloud.roborock();
            tracing::info!(base_url = %roborock.base_url, "using the roborock cloud");
            run(&config, RoborockCloudClient::new(&roborock)?).await
        }
    }
}

async fn run<C>(config: &Config, cloud: C) -> Result<(), Box<dyn std::error::Error>>
where
    C: SceneCloud + 'static,
{
    let event_bus = InProcessEventBus::new(256);

    let mut platform = ScenePlatform::new(
        config.devices()?,
        config.cloud.credentials(),
        Arc::new(cloud),
        Arc::new(event_bus.clone()),
        SelectionStore::new(),
    );
    let discovered = platform.setup().await?;
    tracing::info!(
        integration = platform.name(),
        devices = discovered.len(),
        "integration set up"
    );
    tracing::debug!(selections = ?platform.selections().snapshot(), "initial scene selections");

    let platform = Arc::new(platform);
    let app = router::build(AppState::from_arc(Arc::clone(&platform), event_bus));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "scenehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match Arc::try_unwrap(platform) {
        Ok(mut platform) => platform.teardown().await?,
        Err(_) => tracing::warn!("platform still in use, skipping teardown"),
    }
    tracing::info!("scenehubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received shutdown signal"),
        Err(err) => tracing::error!(%err, "failed to listen for shutdown signal"),
    }
}
