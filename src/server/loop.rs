// Accept loop module
// Accepts connections forever and hands each one off to the connection module

use tokio::net::TcpListener;

use super::connection;
use crate::logger;

/// Accept connections until the process is externally terminated.
///
/// There is no shutdown or restart path, so this loop never breaks. Accept
/// failures are logged and the loop keeps going; everything after accept
/// happens in a task spawned per connection.
pub async fn run(listener: TcpListener) {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => connection::serve(stream),
            Err(e) => logger::log_accept_error(&e),
        }
    }
}
