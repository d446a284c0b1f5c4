//! homecount server binary.
//!
//! Startup order:
//! - load config (strict parsing + validate; failure aborts startup)
//! - spawn the one-shot IP probe and the scheduled greeter
//! - bind and serve `GET /` until the process is stopped

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use homecount_server::{app_state, config, greeter, probe, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("homecount.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    if cfg.probe.enabled {
        let url = cfg.probe.url.clone();
        tokio::spawn(async move { probe::announce_public_ip(&url).await });
    }

    tokio::spawn(greeter::run(cfg.greeter.interval_ms, cfg.greeter.message.clone()));

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "homecount starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
