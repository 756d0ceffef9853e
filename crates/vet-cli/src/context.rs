use std::sync::Arc;

use anyhow::Context;
use vet_config::{BackendMode, VetConfig};
use vet_core::projection::ProjectionOptions;
use vet_core::record::Reviewable;
use vet_gateway::{
    ApiRequest, ApiResponse, HttpTransport, MockTransport, Transport, TransportError,
};
use vet_workflow::ReviewController;

/// The transport selected by `[backend] mode`.
#[derive(Debug, Clone)]
pub enum BackendTransport {
    Http(HttpTransport),
    Mock(Arc<MockTransport>),
}

impl Transport for BackendTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        match self {
            Self::Http(transport) => transport.send(request).await,
            Self::Mock(transport) => transport.send(request).await,
        }
    }
}

/// Per-invocation state shared by all command handlers.
#[derive(Debug)]
pub struct AppContext {
    pub config: VetConfig,
    pub transport: BackendTransport,
}

impl AppContext {
    pub fn init(config: VetConfig) -> anyhow::Result<Self> {
        let transport = match config.backend.mode {
            BackendMode::Http => BackendTransport::Http(
                HttpTransport::from_config(&config.backend)
                    .context("failed to build HTTP client")?,
            ),
            BackendMode::Mock => {
                tracing::info!(
                    latency_ms = config.backend.mock_latency_ms,
                    "using in-memory mock backend"
                );
                BackendTransport::Mock(Arc::new(MockTransport::seeded(
                    config.backend.mock_latency(),
                )))
            }
        };
        Ok(Self { config, transport })
    }

    /// A fresh panel controller over the shared transport.
    pub fn controller<R: Reviewable>(&self) -> ReviewController<R, BackendTransport> {
        ReviewController::from_transport(self.transport.clone())
    }

    pub const fn projection_options(&self) -> ProjectionOptions {
        self.config.display.projection_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_mode_builds_mock_transport() {
        let mut config = VetConfig::default();
        config.backend.mode = BackendMode::Mock;
        let ctx = AppContext::init(config).unwrap();
        assert!(matches!(ctx.transport, BackendTransport::Mock(_)));
    }

    #[test]
    fn http_mode_builds_http_transport() {
        let ctx = AppContext::init(VetConfig::default()).unwrap();
        match ctx.transport {
            BackendTransport::Http(http) => assert_eq!(http.base_url(), "http://localhost:3000"),
            BackendTransport::Mock(_) => panic!("expected HTTP transport"),
        }
    }
}
