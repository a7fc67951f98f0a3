//! HTTP server assembly.

use std::io;
use std::net::SocketAddr;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Bind the server described by `config`.
///
/// Returns the not-yet-polled server together with the bound addresses, so
/// callers binding port 0 can learn the actual port.
pub fn build_server(state: AppState, config: &AppConfig) -> io::Result<(Server, Vec<SocketAddr>)> {
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind((config.host.as_str(), config.port))?;
    let addrs = server.addrs();

    Ok((server.run(), addrs))
}
