use std::net::SocketAddr;

use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};

mod api;
mod config;
mod errors;
mod forms;
mod listing;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("property_portal=debug")),
        )
        .init();

    let config = AppConfig::load();

    let api = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build backend client: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {:?}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    info!("Starting portal at http://{addr}, backend {}", config.api_base_url);

    let state = AppState { api, config };
    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
