use std::sync::Arc;
use std::time::Duration;

use campus_application::{
    CrudEngine, EntityApiClient, EntityProfile, NotificationService, profile_for,
};
use campus_core::{AppError, AppResult};
use campus_domain::{EntityRecord, ModuleKey, RecordId, StatusFilter, workspace_modules};
use campus_infrastructure::{HttpEntityApiClient, InMemoryEntityApiClient, seed_records};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Commands, RecordStatus};
use crate::console_config::ConsoleConfig;
use crate::render::{render_entities, render_toast, render_workspace};

/// Field changes requested by `edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<RecordStatus>,
}

/// One feature screen driven from the terminal.
pub struct EntityScreen {
    engine: CrudEngine,
}

impl EntityScreen {
    pub fn new(
        profile: Arc<dyn EntityProfile>,
        client: Arc<dyn EntityApiClient>,
        toast_duration: Duration,
    ) -> Self {
        Self {
            engine: CrudEngine::new(profile, client, NotificationService::new(toast_duration)),
        }
    }

    pub async fn list(&self, filter: StatusFilter) -> String {
        self.engine.mount().await;
        if filter != self.engine.selected_filter().await {
            self.select(filter).await;
        }
        self.render().await
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> String {
        self.engine.mount().await;
        self.engine.open_create_modal().await;

        let config = self.engine.config();
        self.engine
            .set_new_entity_field(config.name_field(), name)
            .await;
        if let (Some(field), Some(description)) = (config.description_field(), description) {
            self.engine.set_new_entity_field(field, description).await;
        }

        self.engine.create_entity().await;
        self.render().await
    }

    pub async fn edit(&self, id: &str, changes: RecordChanges) -> AppResult<String> {
        let target = self.find(id).await?;
        self.engine.open_edit_modal(&target).await;

        let config = self.engine.config();
        if let Some(name) = changes.name {
            self.engine
                .set_editing_entity_field(config.name_field(), name)
                .await;
        }
        if let (Some(field), Some(description)) = (config.description_field(), changes.description)
        {
            self.engine
                .set_editing_entity_field(field, description)
                .await;
        }
        if let Some(status) = changes.status {
            self.engine
                .set_editing_entity_field(config.status_field(), status.is_active())
                .await;
        }

        self.engine.save_entity().await;
        Ok(self.render().await)
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        let target = self.find(id).await?;
        self.engine.open_delete_modal(&target).await;
        self.engine.confirm_delete().await;
        Ok(self.render().await)
    }

    /// Looks a record up in the unfiltered list.
    async fn find(&self, id: &str) -> AppResult<EntityRecord> {
        self.engine.mount().await;
        self.select(StatusFilter::All).await;

        let wanted = RecordId::from_value(&Value::String(id.to_owned()));
        let entity = self.engine.config().entity_name();
        self.engine
            .entities()
            .await
            .into_iter()
            .find(|record| wanted.is_some() && self.engine.entity_id(record) == wanted)
            .ok_or_else(|| AppError::NotFound(format!("{entity} '{id}' does not exist")))
    }

    async fn select(&self, filter: StatusFilter) {
        let label = self
            .engine
            .filter_options()
            .await
            .into_iter()
            .find(|option| option.value == filter)
            .map_or_else(|| filter.to_string(), |option| option.label);
        self.engine.select_filter(filter, label).await;
    }

    async fn render(&self) -> String {
        let label = self.engine.selected_filter_label().await;
        let entities = self.engine.entities().await;
        let mut output = String::new();
        if let Some(toast) = render_toast(&self.engine.notifications().current().await) {
            output.push_str(&toast);
            output.push_str("\n\n");
        }
        output.push_str(&render_entities(&self.engine, &label, &entities));
        output
    }
}

/// Runs one console command and returns the rendered screen.
pub async fn run(command: Commands, config: &ConsoleConfig, offline: bool) -> AppResult<String> {
    match command {
        Commands::Workspace => Ok(render_workspace(&workspace_modules())),
        Commands::List { module, filter } => {
            Ok(open_screen(module, config, offline)?.list(filter).await)
        }
        Commands::Create {
            module,
            name,
            description,
        } => Ok(open_screen(module, config, offline)?
            .create(&name, description.as_deref())
            .await),
        Commands::Edit {
            module,
            id,
            name,
            description,
            status,
        } => {
            open_screen(module, config, offline)?
                .edit(
                    &id,
                    RecordChanges {
                        name,
                        description,
                        status,
                    },
                )
                .await
        }
        Commands::Delete { module, id } => {
            open_screen(module, config, offline)?.delete(&id).await
        }
    }
}

fn open_screen(
    module: ModuleKey,
    config: &ConsoleConfig,
    offline: bool,
) -> AppResult<EntityScreen> {
    let profile = profile_for(module)?;
    let entity_config = profile.config().clone();

    let client: Arc<dyn EntityApiClient> = if offline {
        debug!(module = %module, "using seeded in-memory collection");
        Arc::new(InMemoryEntityApiClient::with_records(
            entity_config,
            seed_records(module),
        ))
    } else {
        let http_client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build http client: {error}")))?;
        Arc::new(HttpEntityApiClient::new(
            http_client,
            &config.api_base_url,
            entity_config.api_endpoint(),
        )?)
    };

    Ok(EntityScreen::new(profile, client, config.toast_duration))
}
