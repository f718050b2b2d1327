// Connection serving module
// One spawned task per accepted TCP connection

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Serve a single connection on a spawned task.
///
/// hyper drives HTTP/1.1 with its default keep-alive; connection errors are
/// logged and never reach the accept loop.
pub fn spawn_serve(stream: TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, peer_addr, config).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }
    });
}
