use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use campus_domain::{
    EntityConfig, EntityRecord, FilterOption, RecordId, StatusFilter, ToastKind, status_icon,
};
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};

use crate::crud_ports::{EntityApiClient, EntityProfile};
use crate::notification_service::NotificationService;

mod api_errors;
mod create;
mod delete;
mod edit;
mod loading;
mod state;

pub use state::{DeleteModal, EntityModal, ModalState};

use state::CrudState;

/// Field consulted when the configured id field is absent.
const LEGACY_ID_FIELD: &str = "id";

/// Generic, configuration-driven CRUD controller for one entity screen.
///
/// The server is the source of truth: every filter change and successful
/// mutation reloads the whole collection. Network calls never hold the state
/// lock, so a screen can keep interacting while a request is in flight.
pub struct CrudEngine {
    profile: Arc<dyn EntityProfile>,
    client: Arc<dyn EntityApiClient>,
    notifications: NotificationService,
    state: Mutex<CrudState>,
    load_generation: AtomicU64,
}

impl CrudEngine {
    /// Creates an engine for one screen.
    #[must_use]
    pub fn new(
        profile: Arc<dyn EntityProfile>,
        client: Arc<dyn EntityApiClient>,
        notifications: NotificationService,
    ) -> Self {
        let state = CrudState::new(
            profile.config().entity_plural_name(),
            profile.create_empty_entity(),
        );

        Self {
            profile,
            client,
            notifications,
            state: Mutex::new(state),
            load_generation: AtomicU64::new(0),
        }
    }

    /// Returns the entity configuration driving the screen.
    #[must_use]
    pub fn config(&self) -> &EntityConfig {
        self.profile.config()
    }

    /// Returns the screen-scoped notification service.
    #[must_use]
    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    /// Shows a toast on this screen.
    pub async fn show_toast_notification(&self, message: impl Into<String>, kind: ToastKind) {
        self.notifications
            .show_toast_notification(message, kind)
            .await;
    }

    /// Hides the toast on this screen.
    pub async fn hide_toast(&self) {
        self.notifications.hide_toast().await;
    }

    /// Reads the configured status field.
    #[must_use]
    pub fn entity_status(&self, entity: &EntityRecord) -> bool {
        entity.bool_at(self.config().status_field())
    }

    /// Reads the configured name field, `""` when absent.
    #[must_use]
    pub fn entity_name<'a>(&self, entity: Option<&'a EntityRecord>) -> &'a str {
        entity.map_or("", |entity| entity.str_at(self.config().name_field()))
    }

    /// Reads the configured description field, `""` when absent or unconfigured.
    #[must_use]
    pub fn entity_description<'a>(&self, entity: Option<&'a EntityRecord>) -> &'a str {
        match (entity, self.config().description_field()) {
            (Some(entity), Some(field)) => entity.str_at(field),
            _ => "",
        }
    }

    /// Returns the icon class for a status value.
    #[must_use]
    pub fn status_icon(&self, is_active: bool) -> &'static str {
        status_icon(is_active)
    }

    /// Resolves a record id through the configured id field, then the legacy `id` field.
    #[must_use]
    pub fn entity_id(&self, entity: &EntityRecord) -> Option<RecordId> {
        entity
            .id_at(self.config().id_field())
            .or_else(|| entity.id_at(LEGACY_ID_FIELD))
    }

    /// Returns the current entity list.
    pub async fn entities(&self) -> Vec<EntityRecord> {
        self.state().await.entities.clone()
    }

    /// Returns whether the current list is non-empty.
    pub async fn has_entities(&self) -> bool {
        !self.state().await.entities.is_empty()
    }

    /// Returns the selected status filter.
    pub async fn selected_filter(&self) -> StatusFilter {
        self.state().await.selected_filter
    }

    /// Returns the label of the selected status filter.
    pub async fn selected_filter_label(&self) -> String {
        self.state().await.selected_filter_label.clone()
    }

    /// Returns the filter dropdown options.
    pub async fn filter_options(&self) -> Vec<FilterOption> {
        self.state().await.filter_options.clone()
    }

    /// Returns whether the filter dropdown is open.
    pub async fn is_filter_dropdown_open(&self) -> bool {
        self.state().await.is_filter_dropdown_open
    }

    /// Returns whether a list load is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state().await.is_loading
    }

    /// Returns the create modal state.
    pub async fn create_modal(&self) -> EntityModal {
        self.state().await.create_modal.clone()
    }

    /// Returns the edit modal state.
    pub async fn edit_modal(&self) -> EntityModal {
        self.state().await.edit_modal.clone()
    }

    /// Returns the delete modal state.
    pub async fn delete_modal(&self) -> DeleteModal {
        self.state().await.delete_modal.clone()
    }

    /// Opens the create modal with a blank record.
    pub async fn open_create_modal(&self) {
        let mut state = self.state().await;
        state.create_modal.working = self.profile.create_empty_entity();
        state.create_modal.is_open = true;
    }

    /// Closes the create modal and discards the working record.
    pub async fn close_create_modal(&self) {
        let mut state = self.state().await;
        state.create_modal.is_open = false;
        state.create_modal.working = self.profile.create_empty_entity();
    }

    /// Updates one field of the create modal's working record.
    pub async fn set_new_entity_field(&self, field: &str, value: impl Into<Value>) {
        self.state().await.create_modal.working.set(field, value);
    }

    /// Opens the edit modal with a detached copy of `entity`.
    pub async fn open_edit_modal(&self, entity: &EntityRecord) {
        let mut state = self.state().await;
        state.edit_modal.working = entity.clone();
        state.edit_modal.is_open = true;
    }

    /// Closes the edit modal and discards the working copy.
    pub async fn close_edit_modal(&self) {
        let mut state = self.state().await;
        state.edit_modal.is_open = false;
        state.edit_modal.working = self.profile.create_empty_entity();
    }

    /// Updates one field of the edit modal's working copy.
    pub async fn set_editing_entity_field(&self, field: &str, value: impl Into<Value>) {
        self.state().await.edit_modal.working.set(field, value);
    }

    /// Opens the delete modal for `entity`.
    pub async fn open_delete_modal(&self, entity: &EntityRecord) {
        let mut state = self.state().await;
        state.delete_modal.working = Some(entity.clone());
        state.delete_modal.is_open = true;
    }

    /// Closes the delete modal and forgets the target.
    pub async fn close_delete_modal(&self) {
        let mut state = self.state().await;
        state.delete_modal.is_open = false;
        state.delete_modal.working = None;
    }

    async fn state(&self) -> MutexGuard<'_, CrudState> {
        self.state.lock().await
    }

    fn next_load_generation(&self) -> u64 {
        self.load_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current_load(&self, generation: u64) -> bool {
        self.load_generation.load(Ordering::SeqCst) == generation
    }
}
