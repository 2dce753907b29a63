// Logger module
// Timestamped line logging to stdout (info) and stderr (errors)

use chrono::Local;
use std::net::SocketAddr;

/// Prefix a message with the local-time stamp used on every line
fn format_line(message: &str) -> String {
    format!("{} {message}", Local::now().format("%Y/%m/%d %H:%M:%S"))
}

fn write_info(message: &str) {
    println!("{}", format_line(message));
}

fn write_error(message: &str) {
    eprintln!("{}", format_line(message));
}

/// The single readiness line, emitted once after a successful bind and
/// before any request is served.
pub fn log_server_ready(addr: &SocketAddr) {
    write_info(&format!(
        "leeroy web server ready - listening on http://{addr}"
    ));
}

/// Fatal startup failure; the caller exits non-zero after this.
pub fn log_fatal(context: &str, err: &std::io::Error) {
    write_error(&format!("[FATAL] {context}: {err}"));
}

pub fn log_accept_error(err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to accept connection: {err}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}
