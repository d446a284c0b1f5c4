//! Shared application state.
//!
//! The visit counter is an explicitly owned object living inside the state
//! rather than a module-level global; its lifecycle matches the process.

use std::sync::Arc;

use homecount_core::counter::VisitCounter;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    visits: VisitCounter,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                visits: VisitCounter::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn visits(&self) -> &VisitCounter {
        &self.inner.visits
    }
}
