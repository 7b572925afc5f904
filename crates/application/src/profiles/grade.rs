use campus_core::AppResult;
use campus_domain::{EntityConfig, EntityConfigInput, EntityLayout, EntityRecord, GrammaticalGender};

use super::require_text;
use crate::crud_ports::EntityProfile;

const LEVEL_FIELD: &str = "gradeLevel";
const DESCRIPTION_FIELD: &str = "gradeDescription";
const STATUS_FIELD: &str = "gradeStatus";

/// Grades screen.
#[derive(Debug, Clone)]
pub struct GradeProfile {
    config: EntityConfig,
}

impl GradeProfile {
    /// Creates the grades profile.
    pub fn new() -> AppResult<Self> {
        let config = EntityConfig::new(EntityConfigInput {
            entity_name: "Grade".to_owned(),
            entity_plural_name: "Grades".to_owned(),
            entity_gender: GrammaticalGender::Masculine,
            api_endpoint: "grades".to_owned(),
            name_field: LEVEL_FIELD.to_owned(),
            description_field: Some(DESCRIPTION_FIELD.to_owned()),
            id_field: "gradeId".to_owned(),
            status_field: STATUS_FIELD.to_owned(),
            layout: EntityLayout::Grid,
            create_button_label: Some("Create Grade".to_owned()),
            subtitle: Some("Manage the grade levels offered by the school".to_owned()),
            table_headers: None,
        })?;

        Ok(Self { config })
    }
}

impl EntityProfile for GradeProfile {
    fn config(&self) -> &EntityConfig {
        &self.config
    }

    fn create_empty_entity(&self) -> EntityRecord {
        EntityRecord::new()
            .with(LEVEL_FIELD, "")
            .with(DESCRIPTION_FIELD, "")
            .with(STATUS_FIELD, true)
    }

    fn validate_entity(&self, candidate: &EntityRecord) -> AppResult<()> {
        require_text(candidate, LEVEL_FIELD, "Grade level is required")?;
        require_text(candidate, DESCRIPTION_FIELD, "Grade description is required")
    }

    fn create_payload(&self, candidate: &EntityRecord) -> EntityRecord {
        EntityRecord::new()
            .with(LEVEL_FIELD, candidate.str_at(LEVEL_FIELD).trim())
            .with(DESCRIPTION_FIELD, candidate.str_at(DESCRIPTION_FIELD).trim())
            .with(STATUS_FIELD, true)
    }
}

#[cfg(test)]
mod tests {
    use crate::crud_ports::EntityProfile;

    use super::GradeProfile;

    #[test]
    fn description_is_required() {
        let profile = GradeProfile::new().unwrap_or_else(|_| unreachable!());
        let candidate = profile.create_empty_entity().with("gradeLevel", "1st");
        let error = profile.validate_entity(&candidate).err();
        assert_eq!(
            error.map(|error| error.detail().to_owned()),
            Some("Grade description is required".to_owned())
        );
    }

    #[test]
    fn new_grades_are_always_created_active() {
        let profile = GradeProfile::new().unwrap_or_else(|_| unreachable!());
        let candidate = profile
            .create_empty_entity()
            .with("gradeLevel", " 1st ")
            .with("gradeDescription", "First grade")
            .with("gradeStatus", false);
        let payload = profile.create_payload(&candidate);
        assert!(payload.bool_at("gradeStatus"));
        assert_eq!(payload.str_at("gradeLevel"), "1st");
    }
}
