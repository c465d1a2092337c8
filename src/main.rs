use toilet_map::api::overpass::Client;
use toilet_map::api::service::{State, router::router};
use toilet_map::bounds::compute_bounds;
use toilet_map::config::{Config, REQUIRED_VARIABLES};
use toilet_map::state::AppState;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let client = Client::new(&config.overpass_url)?;
    let app = AppState::new(compute_bounds(&config.initial_viewport)).shared();

    let state = State::new(app, client);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
