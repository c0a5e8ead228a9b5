use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod probe;
mod server;

use error::{Result, ServerError};

fn main() -> ExitCode {
    let cli = config::Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &config::Cli) -> Result<()> {
    let cfg = config::Config::load(cli)?;
    let log = logger::init(&cfg).map_err(ServerError::Logger)?;

    // Worker threads default to the number of CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(ServerError::Runtime)?;

    runtime.block_on(async_main(cfg, log))
}

async fn async_main(cfg: config::Config, log: Arc<logger::Logger>) -> Result<()> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr, cfg.server.backlog)
        .map_err(|source| ServerError::Bind { addr, source })?;

    let prober = probe::Prober::new()?;
    let state = Arc::new(config::AppState::new(cfg, prober, log));

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    logger::log_serving(&addr);
    server::start_server_loop(listener, state, &signals).await;
    Ok(())
}
