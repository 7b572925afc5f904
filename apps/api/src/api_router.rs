use axum::Router;
use axum::routing::get;
use campus_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/workspace/modules",
            get(handlers::workspace::list_workspace_modules_handler),
        )
        .route(
            "/{collection}",
            get(handlers::collections::list_records_handler)
                .post(handlers::collections::create_record_handler),
        )
        .route(
            "/{collection}/{id}",
            get(handlers::collections::find_record_handler)
                .patch(handlers::collections::update_record_handler)
                .delete(handlers::collections::delete_record_handler),
        )
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
