use axum::Json;
use campus_domain::workspace_modules;

use crate::dto::WorkspaceModuleResponse;

pub async fn list_workspace_modules_handler() -> Json<Vec<WorkspaceModuleResponse>> {
    Json(
        workspace_modules()
            .into_iter()
            .map(WorkspaceModuleResponse::from)
            .collect(),
    )
}
