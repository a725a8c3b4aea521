use std::sync::Arc;

use statsbasket::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    logger::init(&cfg)?;

    let addr = cfg.get_socket_addr()?;

    // A failed bind is fatal; there is nothing to recover to.
    let listener = server::create_listener(addr)?;

    let instance_id = config::instance_id_from_env();
    logger::log_server_start(&addr, &cfg, &instance_id);

    let state = Arc::new(config::AppState::new(cfg, instance_id));
    server::run(listener, state).await
}
