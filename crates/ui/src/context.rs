use std::sync::Arc;

use lesson_core::Catalog;

/// Shared read-only lesson content, provided by the composition root
/// (e.g. `crates/app`) and consumed by the phase views. The catalog is
/// immutable configuration; nothing downstream can change it.
#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}
