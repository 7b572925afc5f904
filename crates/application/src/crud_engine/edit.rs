use campus_domain::{EntityRecord, RecordId, ToastKind};
use tracing::{info, warn};

use super::CrudEngine;
use super::api_errors::{CrudAction, FailureResolution, resolve_failure};

impl CrudEngine {
    /// Validates and submits the edit modal's working copy as a partial update.
    ///
    /// The matching list entry is patched from the response before the full
    /// reload replaces the list, so the patch is visible for one reload cycle.
    pub async fn save_entity(&self) {
        let editing = {
            let mut state = self.state().await;
            if state.edit_modal.is_busy {
                return;
            }
            let editing = state.edit_modal.working.clone();
            if let Err(error) = self.profile.validate_entity(&editing) {
                drop(state);
                self.show_toast_notification(error.detail(), ToastKind::Error)
                    .await;
                return;
            }
            state.edit_modal.is_busy = true;
            editing
        };

        let entity = self.config().entity_name();
        let Some(record_id) = self.entity_id(&editing) else {
            warn!(entity, "edited record has no identifier");
            self.show_toast_notification(
                format!(
                    "Failed to edit {}. The record has no identifier.",
                    entity.to_lowercase()
                ),
                ToastKind::Error,
            )
            .await;
            self.state().await.edit_modal.is_busy = false;
            return;
        };

        let payload = self.profile.update_payload(&editing);
        match self.client.update_record(&record_id, payload).await {
            Ok(response) => {
                info!(entity, record_id = %record_id, "updated entity");
                if let Some(updated) = response {
                    self.patch_listed_entity(&record_id, &updated).await;
                }
                self.load_entities().await;
                let name = self.entity_name(Some(&editing)).trim().to_owned();
                self.close_edit_modal().await;
                self.show_toast_notification(
                    format!("{entity} \"{name}\" updated successfully"),
                    ToastKind::Success,
                )
                .await;
            }
            Err(error) => {
                warn!(entity, record_id = %record_id, error = %error, "failed to update entity");
                let name = self.entity_name(Some(&editing));
                let outcome = resolve_failure(self.config(), CrudAction::Update, &error, name);
                self.show_toast_notification(outcome.message, outcome.kind)
                    .await;
                if outcome.resolution == FailureResolution::CloseAndReload {
                    self.load_entities().await;
                    self.close_edit_modal().await;
                }
            }
        }

        self.state().await.edit_modal.is_busy = false;
    }

    async fn patch_listed_entity(&self, record_id: &RecordId, updated: &EntityRecord) {
        let mut state = self.state().await;
        if let Some(index) = state
            .entities
            .iter()
            .position(|listed| self.entity_id(listed).as_ref() == Some(record_id))
        {
            let patched = state.entities[index].merged_with(updated);
            state.entities[index] = patched;
        }
    }
}
