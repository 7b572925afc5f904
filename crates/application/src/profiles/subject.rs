use campus_core::AppResult;
use campus_domain::{EntityConfig, EntityConfigInput, EntityLayout, EntityRecord, GrammaticalGender};

use super::require_text;
use crate::crud_ports::EntityProfile;

const NAME_FIELD: &str = "subjectName";
const DESCRIPTION_FIELD: &str = "subjectDescription";
const STATUS_FIELD: &str = "subjectStatus";

/// Subjects screen.
#[derive(Debug, Clone)]
pub struct SubjectProfile {
    config: EntityConfig,
}

impl SubjectProfile {
    /// Creates the subjects profile.
    pub fn new() -> AppResult<Self> {
        let config = EntityConfig::new(EntityConfigInput {
            entity_name: "Subject".to_owned(),
            entity_plural_name: "Subjects".to_owned(),
            entity_gender: GrammaticalGender::Feminine,
            api_endpoint: "subjects".to_owned(),
            name_field: NAME_FIELD.to_owned(),
            description_field: Some(DESCRIPTION_FIELD.to_owned()),
            id_field: "subjectID".to_owned(),
            status_field: STATUS_FIELD.to_owned(),
            layout: EntityLayout::Grid,
            create_button_label: Some("Create Subject".to_owned()),
            subtitle: Some("Manage the subjects taught across grades".to_owned()),
            table_headers: None,
        })?;

        Ok(Self { config })
    }
}

impl EntityProfile for SubjectProfile {
    fn config(&self) -> &EntityConfig {
        &self.config
    }

    fn create_empty_entity(&self) -> EntityRecord {
        EntityRecord::new()
            .with(NAME_FIELD, "")
            .with(DESCRIPTION_FIELD, "")
            .with(STATUS_FIELD, true)
    }

    fn validate_entity(&self, candidate: &EntityRecord) -> AppResult<()> {
        require_text(candidate, NAME_FIELD, "Subject name is required")?;
        require_text(candidate, DESCRIPTION_FIELD, "Subject description is required")
    }

    fn create_payload(&self, candidate: &EntityRecord) -> EntityRecord {
        EntityRecord::new()
            .with(NAME_FIELD, candidate.str_at(NAME_FIELD).trim())
            .with(DESCRIPTION_FIELD, candidate.str_at(DESCRIPTION_FIELD).trim())
            .with(STATUS_FIELD, true)
    }
}
