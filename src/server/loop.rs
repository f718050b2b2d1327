// Server loop module
// Accepts connections until the shutdown signal resolves

use std::sync::Arc;
use tokio::net::TcpListener;

use super::{connection, signal};
use crate::config::Config;
use crate::logger;

/// Accept connections until an operator interrupt arrives.
///
/// Accept errors are logged and the loop keeps serving; only the shutdown
/// signal ends it.
pub async fn run_until_shutdown(listener: TcpListener, config: Arc<Config>) {
    let shutdown = signal::shutdown();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::spawn_serve(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                return;
            }
        }
    }
}
