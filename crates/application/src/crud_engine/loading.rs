use campus_domain::{StatusFilter, ToastKind, filter_options};
use tracing::{debug, info, warn};

use super::CrudEngine;
use super::state::default_filter_label;

impl CrudEngine {
    /// Activates the screen: resets the filter dropdown and loads the list.
    pub async fn mount(&self) {
        {
            let plural = self.config().entity_plural_name();
            let mut state = self.state().await;
            state.filter_options = filter_options(plural);
            state.selected_filter_label = default_filter_label(&state.filter_options, plural);
        }

        self.load_entities().await;
    }

    /// Toggles the filter dropdown.
    pub async fn toggle_filter_dropdown(&self) {
        let mut state = self.state().await;
        state.is_filter_dropdown_open = !state.is_filter_dropdown_open;
    }

    /// Closes the filter dropdown, e.g. after a click outside of it.
    pub async fn close_filter_dropdown(&self) {
        self.state().await.is_filter_dropdown_open = false;
    }

    /// Selects a status filter and reloads, even when the filter is unchanged.
    pub async fn select_filter(&self, filter: StatusFilter, label: impl Into<String>) {
        {
            let mut state = self.state().await;
            state.selected_filter = filter;
            state.selected_filter_label = label.into();
            state.is_filter_dropdown_open = false;
        }

        self.load_entities().await;
    }

    /// Fetches the collection and replaces the list with the records passing the filter.
    ///
    /// Only the most recently started load may touch the list. On failure the
    /// previous list is kept and an error toast names the collection.
    pub async fn load_entities(&self) {
        let generation = self.next_load_generation();
        let filter = {
            let mut state = self.state().await;
            state.is_loading = true;
            state.selected_filter
        };

        let result = self.client.list_records(filter).await;
        let entity = self.config().entity_plural_name();

        let mut state = self.state().await;
        if !self.is_current_load(generation) {
            debug!(entity, generation, "discarding superseded list response");
            return;
        }
        state.is_loading = false;

        match result {
            Ok(records) => {
                let selected = state.selected_filter;
                let received = records.len();
                state.entities = records
                    .into_iter()
                    .filter(|record| selected.matches(self.entity_status(record)))
                    .collect();
                info!(
                    entity,
                    filter = %selected,
                    received,
                    kept = state.entities.len(),
                    "loaded entity list"
                );
            }
            Err(error) => {
                drop(state);
                warn!(entity, error = %error, "failed to load entity list");
                self.show_toast_notification(format!("Failed to load {entity}"), ToastKind::Error)
                    .await;
            }
        }
    }
}
