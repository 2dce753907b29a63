// Connection module
// Serves a single accepted TCP connection over HTTP/1.1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::handler;
use crate::logger;

/// Serve one connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Drives hyper's HTTP/1.1 connection state machine with builder defaults
///    (no custom timeouts, stock keep-alive)
/// 3. Dispatches every request on the connection to the single handler
///
/// A protocol error ends the connection, never the process.
pub fn serve(stream: TcpStream) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(io, service_fn(handler::handle_request));

        if let Err(e) = conn.await {
            logger::log_connection_error(&e);
        }
    });
}
