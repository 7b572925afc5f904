use campus_domain::{RecordId, ToastKind};
use tracing::{info, warn};

use super::CrudEngine;
use super::api_errors::{CrudAction, FailureResolution, resolve_failure};

impl CrudEngine {
    /// Deletes the delete modal's target. No-op when there is no target or it has no id.
    pub async fn confirm_delete(&self) {
        let (record_id, deleted_name) = {
            let mut state = self.state().await;
            if state.delete_modal.is_busy {
                return;
            }
            let Some(target) = state.delete_modal.working.as_ref() else {
                return;
            };
            let Some(record_id) = self.entity_id(target) else {
                return;
            };
            let deleted_name = self.entity_name(Some(target)).to_owned();
            state.delete_modal.is_busy = true;
            (record_id, deleted_name)
        };
        let entity = self.config().entity_name();

        match self.client.delete_record(&record_id).await {
            Ok(()) => {
                info!(entity, record_id = %record_id, "deleted entity");
                self.load_entities().await;
                self.close_delete_modal().await;
                self.show_toast_notification(
                    format!("{entity} \"{deleted_name}\" deleted successfully"),
                    ToastKind::Success,
                )
                .await;
            }
            Err(error) => {
                warn!(entity, record_id = %record_id, error = %error, "failed to delete entity");
                let outcome = resolve_failure(
                    self.config(),
                    CrudAction::Delete,
                    &error,
                    deleted_name.as_str(),
                );
                match outcome.resolution {
                    FailureResolution::RetryInPlace => {}
                    FailureResolution::CloseAndReload => {
                        self.load_entities().await;
                        self.close_delete_modal().await;
                    }
                    FailureResolution::RemoveLocally => {
                        self.remove_listed_entity(&record_id).await;
                        self.close_delete_modal().await;
                    }
                }
                self.show_toast_notification(outcome.message, outcome.kind)
                    .await;
            }
        }

        self.state().await.delete_modal.is_busy = false;
    }

    async fn remove_listed_entity(&self, record_id: &RecordId) {
        let mut state = self.state().await;
        state
            .entities
            .retain(|listed| self.entity_id(listed).as_ref() != Some(record_id));
    }
}
