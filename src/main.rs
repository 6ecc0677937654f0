mod config;
mod console;
mod routes;
mod services;
mod snippets;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(
        think_delay = ?config.think_delay,
        code_delay = ?config.code_delay,
        debounce = ?config.debounce,
        preview_max_bytes = config.preview_max_bytes,
        session_idle = ?config.session_idle,
        "configuration loaded"
    );

    let state = state::AppState::new(config);
    let _reaper = services::session::spawn_session_reaper(state.clone());
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "daydream listening");
    axum::serve(listener, app).await.expect("server failed");
}
