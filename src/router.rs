// SPDX-License-Identifier: MPL-2.0
//! Catch-all HTTP route stub.
//!
//! Every `GET` request is answered with `From Cloud Run! <path>`, where
//! `<path>` is the request path without its query string. Other methods get
//! `405 Method Not Allowed`.

use crate::error::{Error, Result};
use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// Environment variable holding the port to listen on.
pub const ENV_PORT: &str = "PORT";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

const GREETING: &str = "From Cloud Run! ";

/// Builds the router.
pub fn app() -> Router {
    Router::new()
        .route("/", get(echo_path))
        .route("/{*path}", get(echo_path))
}

async fn echo_path(uri: Uri) -> String {
    greeting_for(uri.path())
}

fn greeting_for(path: &str) -> String {
    format!("{GREETING}{path}")
}

/// Resolves the listen port from `PORT`.
pub fn port_from_env() -> Result<u16> {
    match std::env::var(ENV_PORT) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|err| Error::Config(format!("invalid {ENV_PORT} {raw:?}: {err}"))),
        _ => Ok(DEFAULT_PORT),
    }
}

/// Address to bind for `port` on every interface.
#[must_use]
pub fn listen_addr(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

/// Binds `addr` and serves until the process exits.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener).await
}

/// Serves on an already bound listener.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "router listening");
    axum::serve(listener, app()).await?;
    Ok(())
}
