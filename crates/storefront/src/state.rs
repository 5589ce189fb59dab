//! Shared application state.

use std::sync::Arc;

use crate::config::HandoraConfig;
use crate::services::recommend::RecommendClient;
use crate::store::DataStore;

struct AppStateInner {
    config: HandoraConfig,
    store: DataStore,
    recommender: Option<RecommendClient>,
}

/// Cheaply cloneable handle passed to every handler.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: HandoraConfig,
        store: DataStore,
        recommender: Option<RecommendClient>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                recommender,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HandoraConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn store(&self) -> &DataStore {
        &self.inner.store
    }

    #[must_use]
    pub fn recommender(&self) -> Option<&RecommendClient> {
        self.inner.recommender.as_ref()
    }
}
