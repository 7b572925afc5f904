use campus_domain::{StatusFilter, WorkspaceModule};
use serde::{Deserialize, Serialize};

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Query string accepted by collection listings.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionListQuery {
    pub status: Option<String>,
}

impl CollectionListQuery {
    /// Resolves the status filter, listing everything when none was sent.
    pub fn status_filter(&self) -> Result<StatusFilter, campus_core::AppError> {
        self.status
            .as_deref()
            .map_or(Ok(StatusFilter::All), str::parse::<StatusFilter>)
    }
}

/// API representation of a workspace landing page card.
#[derive(Debug, Serialize)]
pub struct WorkspaceModuleResponse {
    pub key: String,
    pub title: String,
    pub description: String,
}

impl From<WorkspaceModule> for WorkspaceModuleResponse {
    fn from(value: WorkspaceModule) -> Self {
        Self {
            key: value.key.as_str().to_owned(),
            title: value.title.to_owned(),
            description: value.description.to_owned(),
        }
    }
}
