use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod config;
mod data;
mod handler;
mod http;
mod logger;
mod models;
mod render;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load_from("config")?;
    logger::init(&cfg)?;

    // Seed and validate the domain data before binding anything
    let state = Arc::new(config::AppState::new(&cfg)?);

    // Build the Tokio runtime, honoring the workers override
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(state))
}

async fn async_main(state: Arc<config::AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let active_connections = Arc::new(AtomicUsize::new(0));

    logger::log_server_start(&addr, &state.config, &state.app);

    // Connection tasks use spawn_local, which needs a LocalSet
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::server_loop::run(listener, state, active_connections))
        .await
}
