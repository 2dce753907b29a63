mod handler;
mod logger;
mod response;
mod server;

/// The one and only listen port. There is no configuration surface:
/// no flags, no environment variables, no config file.
const LISTEN_PORT: u16 = 8000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));

    // A bind failure (port in use, permission denied) is the only fatal error
    let listener = match server::bind_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_fatal(&format!("failed to bind {addr}"), &e);
            return Err(e.into());
        }
    };

    logger::log_server_ready(&addr);

    server::run(listener).await;

    Ok(())
}
