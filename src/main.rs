use std::sync::Arc;

use tokio::net::TcpListener;

mod calc;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    let log = logger::Logger::from_config(&cfg.logging)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, log))
}

async fn async_main(
    cfg: config::Config,
    log: logger::Logger,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg, log));
    state.logger.log_server_start(&addr);

    tokio::select! {
        result = accept_loop(listener, Arc::clone(&state)) => result?,
        () = server::signal::shutdown_signal() => {
            state.logger.info("Shutdown signal received, stopping server");
        }
    }

    state.logger.flush();
    Ok(())
}

async fn accept_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                server::connection::spawn_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                state.logger.error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
