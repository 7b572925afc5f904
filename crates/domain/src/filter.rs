use std::fmt::{Display, Formatter};
use std::str::FromStr;

use campus_core::AppError;
use serde::{Deserialize, Serialize};

/// Status filter applied to an entity list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every record regardless of status.
    All,
    /// Only active records.
    #[default]
    Active,
    /// Only inactive records.
    Inactive,
}

impl StatusFilter {
    /// Returns whether a record with the given status passes the filter.
    #[must_use]
    pub fn matches(self, is_active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => is_active,
            Self::Inactive => !is_active,
        }
    }

    /// Returns the `status` query parameter value, `None` for [`StatusFilter::All`].
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some("active"),
            Self::Inactive => Some("inactive"),
        }
    }

    /// Returns the stable filter name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(AppError::Validation(format!(
                "unknown status filter '{other}', expected all, active or inactive"
            ))),
        }
    }
}

/// Selectable entry of the filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Filter applied when the option is chosen.
    pub value: StatusFilter,
    /// Display label.
    pub label: String,
    /// Icon class.
    pub icon: &'static str,
}

/// Builds the dropdown options for an entity's plural display name.
#[must_use]
pub fn filter_options(entity_plural_name: &str) -> Vec<FilterOption> {
    vec![
        FilterOption {
            value: StatusFilter::All,
            label: format!("All {entity_plural_name}"),
            icon: "pi-list",
        },
        FilterOption {
            value: StatusFilter::Active,
            label: format!("Active {entity_plural_name}"),
            icon: "pi-check-circle",
        },
        FilterOption {
            value: StatusFilter::Inactive,
            label: format!("Inactive {entity_plural_name}"),
            icon: "pi-times-circle",
        },
    ]
}

/// Returns the icon class shown next to a record's status.
#[must_use]
pub fn status_icon(is_active: bool) -> &'static str {
    if is_active {
        "pi-check-circle"
    } else {
        "pi-times-circle"
    }
}
