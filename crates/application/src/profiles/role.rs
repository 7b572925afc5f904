use campus_core::AppResult;
use campus_domain::{
    EntityConfig, EntityConfigInput, EntityLayout, EntityRecord, GrammaticalGender, TableHeaders,
};

use super::require_text;
use crate::crud_ports::EntityProfile;

const NAME_FIELD: &str = "roleName";
const STATUS_FIELD: &str = "roleStatus";

/// Roles screen.
///
/// Role records also carry generic `name`/`status` aliases, which are kept in
/// sync with `roleName`/`roleStatus` on create.
#[derive(Debug, Clone)]
pub struct RoleProfile {
    config: EntityConfig,
}

impl RoleProfile {
    /// Creates the roles profile.
    pub fn new() -> AppResult<Self> {
        let config = EntityConfig::new(EntityConfigInput {
            entity_name: "Role".to_owned(),
            entity_plural_name: "Roles".to_owned(),
            entity_gender: GrammaticalGender::Masculine,
            api_endpoint: "roles".to_owned(),
            name_field: NAME_FIELD.to_owned(),
            description_field: Some("description".to_owned()),
            id_field: "roleId".to_owned(),
            status_field: STATUS_FIELD.to_owned(),
            layout: EntityLayout::Table,
            create_button_label: Some("Create Role".to_owned()),
            subtitle: Some("Manage system roles and their permissions".to_owned()),
            table_headers: Some(TableHeaders {
                name: Some("Role Name".to_owned()),
                status: Some("Status".to_owned()),
                actions: Some("Actions".to_owned()),
            }),
        })?;

        Ok(Self { config })
    }
}

impl EntityProfile for RoleProfile {
    fn config(&self) -> &EntityConfig {
        &self.config
    }

    fn create_empty_entity(&self) -> EntityRecord {
        EntityRecord::new()
            .with(NAME_FIELD, "")
            .with(STATUS_FIELD, true)
            .with("name", "")
            .with("status", true)
    }

    fn validate_entity(&self, candidate: &EntityRecord) -> AppResult<()> {
        require_text(candidate, NAME_FIELD, "Role name is required")
    }

    fn create_payload(&self, candidate: &EntityRecord) -> EntityRecord {
        let trimmed = candidate.with_trimmed_strings();
        let name = trimmed.str_at(NAME_FIELD).to_owned();
        let status = trimmed.bool_at(STATUS_FIELD);
        trimmed.with("name", name).with("status", status)
    }
}
