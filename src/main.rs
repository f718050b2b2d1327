use std::path::Path;
use std::process;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod preflight;
mod server;

fn main() {
    let cfg = match config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_error(&format!("Failed to load configuration: {e}"));
            process::exit(1);
        }
    };

    // The test pages cannot be generated; refuse to start without them
    if let Err(missing) = preflight::check_required_pages(Path::new(&cfg.server.root_dir)) {
        logger::log_missing_pages(&missing);
        process::exit(1);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            logger::log_error(&format!("Failed to start runtime: {e}"));
            process::exit(1);
        }
    };

    match runtime.block_on(async_main(cfg)) {
        Ok(()) => logger::log_shutdown(),
        // Diagnostics were already printed at the failure site
        Err(_) => process::exit(1),
    }
}

async fn async_main(cfg: config::Config) -> std::io::Result<()> {
    let addr = match cfg.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            logger::log_error(&e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    let listener = match server::bind_listener(addr) {
        Ok(listener) => listener,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            logger::log_port_in_use(cfg.server.port);
            return Err(e);
        }
        Err(e) => {
            logger::log_bind_error(&addr, &e);
            return Err(e);
        }
    };

    logger::log_server_start(&addr, &cfg);

    server::run_until_shutdown(listener, Arc::new(cfg)).await;
    Ok(())
}
