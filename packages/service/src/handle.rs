//! # Service Handle
//!
//! Injectable connect-once handle to a [`ContentService`].
//!
//! The connection is established by an async connector on first use and
//! memoized for the lifetime of the handle. Components receive the handle
//! explicitly instead of reaching for a process-wide singleton; cloning the
//! handle shares the same memoized connection.

use crate::{ContentService, ServiceError};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::OnceCell;

type Connector = Box<
    dyn Fn() -> Pin<Box<dyn Future<Output = Result<Arc<dyn ContentService>, ServiceError>> + Send>>
        + Send
        + Sync,
>;

#[derive(Clone)]
pub struct ServiceHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    connector: Connector,
    cell: OnceCell<Arc<dyn ContentService>>,
}

impl ServiceHandle {
    /// Create a handle that will connect lazily via `connector`.
    pub fn new<F, Fut>(connector: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn ContentService>, ServiceError>> + Send + 'static,
    {
        Self {
            inner: Arc::new(HandleInner {
                connector: Box::new(move || Box::pin(connector())),
                cell: OnceCell::new(),
            }),
        }
    }

    /// Wrap an already-constructed service. Used by tests and the CLI demo.
    pub fn from_service(service: Arc<dyn ContentService>) -> Self {
        Self::new(move || {
            let service = service.clone();
            async move { Ok(service) }
        })
    }

    /// Get the connected service, running the connector on first call.
    ///
    /// A failed connect is not memoized; the next call tries again.
    pub async fn get(&self) -> Result<Arc<dyn ContentService>, ServiceError> {
        let service = self
            .inner
            .cell
            .get_or_try_init(|| (self.inner.connector)())
            .await?;
        Ok(service.clone())
    }

    /// Whether the one-time connect has already happened.
    pub fn is_connected(&self) -> bool {
        self.inner.cell.initialized()
    }
}
