//! HTTP server command
//!
//! Binds tiny_http on all interfaces and hands every request to the
//! routing adapter. Each request performs its own full upstream fetch on
//! its own call stack; there is no shared in-flight state.

use log::info;
use tiny_http::Server;

use crate::server::tiny_http::handle_request;
use earthling::config::Config;
use earthling::upstream::UpstreamClient;

/// Start the roster HTTP server
pub fn serve(port_override: Option<u16>) -> anyhow::Result<()> {
    let config = Config::load();
    let port = port_override.unwrap_or(config.server.port);
    let client = UpstreamClient::new(config.upstream)?;

    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    println!("Serving character roster on http://localhost:{port}");
    println!();
    println!("  GET /characters      filtered roster as JSON");
    println!("  GET /characters/csv  filtered roster as CSV download");
    println!("  GET /healthcheck     upstream connectivity probe");
    println!();
    println!("Press Ctrl+C to stop");

    info!("listening on {addr}");
    for request in server.incoming_requests() {
        let response = handle_request(&request, &client);
        let _ = request.respond(response);
    }

    Ok(())
}
