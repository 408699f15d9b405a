//! # Tessera Server
//!
//! Serves theme compositions and the component registry over HTTP, built on `Axum`.
//!
//! ## Example
//! ```no_run
//! use tessera_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4590)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

pub use crate::router::init as build_router;

use anyhow::{Context, Result};
use axum_server::Handle;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tessera::domain::config::ApiConfig;
use tessera::kernel::server::ApiState;
use tokio::signal;
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Overrides the directory themes are read from.
    pub fn themes_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.cfg.themes.root = root.into();
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        let Some(ssl) = &self.cfg.server.ssl else {
            return Ok(());
        };
        if !ssl.cert.exists() {
            anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
        }
        if !ssl.key.exists() {
            anyhow::bail!("SSL key not found at: {}", ssl.key.display());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if ssl.key.metadata()?.permissions().mode() & 0o077 != 0 {
                warn!(key = %ssl.key.display(), "SSL private key is readable by others (expected 600)");
            }
        }
        Ok(())
    }

    /// Consumes the builder: initializes the feature slices and the API state.
    ///
    /// # Errors
    /// Returns an error if the SSL files are missing, the component manifest is invalid or
    /// the themes root cannot be opened.
    pub async fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(%address, themes = %self.cfg.themes.root.display(), "Initializing server");

        let slices = tessera::init(&self.cfg).await.context("Feature bootstrap failed")?;

        let state = ApiState::builder()
            .config(self.cfg)
            .features(tessera::features::ENABLED.iter().copied())
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves until Ctrl+C or SIGTERM, then drains connections for up to 30 seconds.
    ///
    /// # Errors
    /// Returns an error if binding fails or the TLS material cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let app = router::init(self.state);

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, draining connections");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        if let Some(ssl) = &cfg.server.ssl {
            info!("Listening on https://{address}");
            let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                .await
                .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Listening on http://{address}");
            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
