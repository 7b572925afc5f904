use campus_domain::ToastKind;
use tracing::{info, warn};

use super::CrudEngine;
use super::api_errors::{CrudAction, resolve_failure};

impl CrudEngine {
    /// Validates and submits the create modal's working record.
    ///
    /// The success toast uses the name returned by the server. The modal stays
    /// open on failure so the user can correct the input.
    pub async fn create_entity(&self) {
        let candidate = {
            let mut state = self.state().await;
            if state.create_modal.is_busy {
                return;
            }
            let candidate = state.create_modal.working.clone();
            if let Err(error) = self.profile.validate_entity(&candidate) {
                drop(state);
                self.show_toast_notification(error.detail(), ToastKind::Error)
                    .await;
                return;
            }
            state.create_modal.is_busy = true;
            candidate
        };

        let entity = self.config().entity_name();
        let payload = self.profile.create_payload(&candidate);

        match self.client.create_record(payload).await {
            Ok(Some(created)) => {
                let created_name = self.entity_name(Some(&created)).to_owned();
                info!(entity, name = %created_name, "created entity");
                self.show_toast_notification(
                    format!("{entity} \"{created_name}\" created successfully"),
                    ToastKind::Success,
                )
                .await;
                self.load_entities().await;
                self.close_create_modal().await;
            }
            Ok(None) => {
                warn!(entity, "create returned an empty response");
            }
            Err(error) => {
                warn!(entity, error = %error, "failed to create entity");
                let name = self.entity_name(Some(&candidate));
                let outcome = resolve_failure(self.config(), CrudAction::Create, &error, name);
                self.show_toast_notification(outcome.message, outcome.kind)
                    .await;
            }
        }

        self.state().await.create_modal.is_busy = false;
    }
}
