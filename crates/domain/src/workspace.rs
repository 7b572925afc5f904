use std::fmt::{Display, Formatter};
use std::str::FromStr;

use campus_core::AppError;
use serde::{Deserialize, Serialize};

/// Feature screen reachable from the workspace landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKey {
    /// School roles.
    Roles,
    /// Grade levels.
    Grades,
    /// Taught subjects.
    Subjects,
}

impl ModuleKey {
    /// Every module in landing page order.
    pub const ALL: [Self; 3] = [Self::Roles, Self::Grades, Self::Subjects];

    /// Returns the stable module name, which is also its collection path.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roles => "roles",
            Self::Grades => "grades",
            Self::Subjects => "subjects",
        }
    }
}

impl Display for ModuleKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ModuleKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "roles" | "role" => Ok(Self::Roles),
            "grades" | "grade" => Ok(Self::Grades),
            "subjects" | "subject" => Ok(Self::Subjects),
            other => Err(AppError::Validation(format!(
                "unknown module '{other}', expected roles, grades or subjects"
            ))),
        }
    }
}

/// Card shown on the workspace landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceModule {
    /// Target screen.
    pub key: ModuleKey,
    /// Card title.
    pub title: &'static str,
    /// Card description.
    pub description: &'static str,
}

/// Returns the landing page cards in display order.
#[must_use]
pub fn workspace_modules() -> Vec<WorkspaceModule> {
    ModuleKey::ALL
        .into_iter()
        .map(|key| match key {
            ModuleKey::Roles => WorkspaceModule {
                key,
                title: "Roles",
                description: "Manage system roles and their permissions",
            },
            ModuleKey::Grades => WorkspaceModule {
                key,
                title: "Grades",
                description: "Manage the grade levels offered by the school",
            },
            ModuleKey::Subjects => WorkspaceModule {
                key,
                title: "Subjects",
                description: "Manage the subjects taught across grades",
            },
        })
        .collect()
}
