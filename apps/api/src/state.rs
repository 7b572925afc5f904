use std::collections::HashMap;
use std::sync::Arc;

use campus_application::profile_for;
use campus_core::{AppError, AppResult};
use campus_domain::ModuleKey;
use campus_infrastructure::{InMemoryEntityApiClient, seed_records};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    collections: Arc<HashMap<ModuleKey, Arc<InMemoryEntityApiClient>>>,
}

impl AppState {
    /// Creates one in-memory collection per workspace module.
    pub fn new(seed_data: bool) -> AppResult<Self> {
        let mut collections = HashMap::new();
        for module in ModuleKey::ALL {
            let config = profile_for(module)?.config().clone();
            let records = if seed_data {
                seed_records(module)
            } else {
                Vec::new()
            };
            collections.insert(
                module,
                Arc::new(InMemoryEntityApiClient::with_records(config, records)),
            );
        }

        Ok(Self {
            collections: Arc::new(collections),
        })
    }

    /// Resolves a collection by its path segment.
    pub fn collection(&self, name: &str) -> AppResult<Arc<InMemoryEntityApiClient>> {
        ModuleKey::ALL
            .into_iter()
            .find(|module| module.as_str() == name)
            .and_then(|module| self.collections.get(&module).cloned())
            .ok_or_else(|| AppError::NotFound(format!("collection '{name}' does not exist")))
    }
}
