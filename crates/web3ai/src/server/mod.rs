//! Info HTTP service
//!
//! Stateless JSON endpoints describing the running application. Has no
//! connection to the model client.

mod api;

pub use api::{
    create_router, HealthResponse, InfoResponse, RootResponse, API_VERSION, ROOT_MESSAGE,
};

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::Result;

/// Bind `settings.host:settings.port` and serve until the process exits
pub async fn serve(settings: Arc<Settings>) -> Result<()> {
    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    serve_with_listener(listener, settings).await
}

/// Serve on an already bound listener
pub async fn serve_with_listener(listener: TcpListener, settings: Arc<Settings>) -> Result<()> {
    let addr = listener.local_addr()?;
    info!(
        addr = %addr,
        app_name = %settings.app_name,
        debug = settings.debug,
        "Starting info server"
    );
    warn!("CORS allows every origin with credentials; do not expose this server publicly");

    let app = create_router(settings);
    axum::serve(listener, app).await?;

    Ok(())
}
