// SPDX-License-Identifier: MPL-2.0
//! Standalone catch-all HTTP route stub.

use iced_notify::{logging, router};

#[tokio::main]
async fn main() {
    logging::init();

    let port = match router::port_from_env() {
        Ok(port) => port,
        Err(err) => {
            tracing::error!(error = %err, "cannot start router");
            std::process::exit(2);
        }
    };

    if let Err(err) = router::serve(router::listen_addr(port)).await {
        tracing::error!(error = %err, "router stopped");
        std::process::exit(1);
    }
}
