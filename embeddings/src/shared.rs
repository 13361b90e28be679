//! Init-once embedding provider handle.
//!
//! Building a provider stands in for loading the model, so it happens at most
//! once per handle: the first [`SharedProvider::get`] runs the factory and
//! every later call reuses the same instance. Keep the handle in a `static`
//! to make it process-wide. Providers are read-only, so nothing needs
//! tearing down.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::error::{EmbeddingError, Result};
use crate::provider::EmbeddingProvider;

type Factory<P> = Box<dyn Fn() -> Result<P> + Send + Sync>;

/// Lazily initialized, shared embedding provider.
pub struct SharedProvider<P> {
    cell: OnceCell<Arc<P>>,
    factory: Factory<P>,
}

impl<P> SharedProvider<P>
where
    P: EmbeddingProvider,
{
    /// Create a handle that builds its provider with `factory` on first use.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<P> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Get the provider, building it if this is the first call.
    ///
    /// A failed build is not cached; the next call tries again.
    pub async fn get(&self) -> Result<Arc<P>> {
        let provider = self
            .cell
            .get_or_try_init(|| async {
                let provider = (self.factory)()?;
                info!(
                    provider = provider.name(),
                    model = provider.model(),
                    dimension = provider.dimension(),
                    "embedding model loaded"
                );
                Ok::<_, EmbeddingError>(Arc::new(provider))
            })
            .await?;

        Ok(Arc::clone(provider))
    }

    /// Whether the provider has been built.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}
