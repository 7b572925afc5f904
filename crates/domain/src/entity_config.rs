use campus_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Rendering hint for an entity screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLayout {
    /// Rows with one column per header.
    Table,
    /// Cards laid out in a grid.
    Grid,
}

/// Grammatical gender used when composing articles in display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammaticalGender {
    /// Masculine noun.
    Masculine,
    /// Feminine noun.
    Feminine,
}

/// Optional column header overrides for table layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHeaders {
    /// Header for the name column.
    pub name: Option<String>,
    /// Header for the status column.
    pub status: Option<String>,
    /// Header for the actions column.
    pub actions: Option<String>,
}

/// Input payload used to build an [`EntityConfig`].
#[derive(Debug, Clone)]
pub struct EntityConfigInput {
    /// Singular display name, e.g. `Role`.
    pub entity_name: String,
    /// Plural display name, e.g. `Roles`.
    pub entity_plural_name: String,
    /// Grammatical gender of the entity noun.
    pub entity_gender: GrammaticalGender,
    /// Collection resource path relative to the API base URL.
    pub api_endpoint: String,
    /// Record field holding the display name.
    pub name_field: String,
    /// Record field holding the optional description.
    pub description_field: Option<String>,
    /// Record field holding the identifier.
    pub id_field: String,
    /// Record field holding the boolean active flag.
    pub status_field: String,
    /// Rendering hint.
    pub layout: EntityLayout,
    /// Label of the create button.
    pub create_button_label: Option<String>,
    /// Screen subtitle.
    pub subtitle: Option<String>,
    /// Table header overrides.
    pub table_headers: Option<TableHeaders>,
}

/// Static per-entity descriptor that parameterizes the generic CRUD engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    entity_name: NonEmptyString,
    entity_plural_name: NonEmptyString,
    entity_gender: GrammaticalGender,
    api_endpoint: NonEmptyString,
    name_field: NonEmptyString,
    description_field: Option<String>,
    id_field: NonEmptyString,
    status_field: NonEmptyString,
    layout: EntityLayout,
    create_button_label: Option<String>,
    subtitle: Option<String>,
    table_headers: Option<TableHeaders>,
}

impl EntityConfig {
    /// Creates a validated entity configuration.
    pub fn new(input: EntityConfigInput) -> AppResult<Self> {
        let api_endpoint = input.api_endpoint.trim().trim_matches('/').to_owned();

        Ok(Self {
            entity_name: NonEmptyString::new(input.entity_name.trim())?,
            entity_plural_name: NonEmptyString::new(input.entity_plural_name.trim())?,
            entity_gender: input.entity_gender,
            api_endpoint: NonEmptyString::new(api_endpoint)?,
            name_field: NonEmptyString::new(input.name_field.trim())?,
            description_field: normalize_optional(input.description_field),
            id_field: NonEmptyString::new(input.id_field.trim())?,
            status_field: NonEmptyString::new(input.status_field.trim())?,
            layout: input.layout,
            create_button_label: normalize_optional(input.create_button_label),
            subtitle: normalize_optional(input.subtitle),
            table_headers: input.table_headers,
        })
    }

    /// Returns the singular display name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        self.entity_name.as_str()
    }

    /// Returns the plural display name.
    #[must_use]
    pub fn entity_plural_name(&self) -> &str {
        self.entity_plural_name.as_str()
    }

    /// Returns the grammatical gender of the entity noun.
    #[must_use]
    pub fn entity_gender(&self) -> GrammaticalGender {
        self.entity_gender
    }

    /// Returns the collection path without surrounding slashes.
    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_str()
    }

    /// Returns the name field binding.
    #[must_use]
    pub fn name_field(&self) -> &str {
        self.name_field.as_str()
    }

    /// Returns the description field binding, if the entity has one.
    #[must_use]
    pub fn description_field(&self) -> Option<&str> {
        self.description_field.as_deref()
    }

    /// Returns the identifier field binding.
    #[must_use]
    pub fn id_field(&self) -> &str {
        self.id_field.as_str()
    }

    /// Returns the status field binding.
    #[must_use]
    pub fn status_field(&self) -> &str {
        self.status_field.as_str()
    }

    /// Returns the rendering hint.
    #[must_use]
    pub fn layout(&self) -> EntityLayout {
        self.layout
    }

    /// Returns the create button label override.
    #[must_use]
    pub fn create_button_label(&self) -> Option<&str> {
        self.create_button_label.as_deref()
    }

    /// Returns the screen subtitle.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns table header overrides.
    #[must_use]
    pub fn table_headers(&self) -> Option<&TableHeaders> {
        self.table_headers.as_ref()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim().to_owned();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}
