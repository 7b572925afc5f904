use std::sync::Arc;

use campus_core::{AppError, AppResult};
use campus_domain::{EntityRecord, ModuleKey};

use crate::crud_ports::EntityProfile;

mod grade;
mod role;
mod subject;

pub use grade::GradeProfile;
pub use role::RoleProfile;
pub use subject::SubjectProfile;

/// Resolves a workspace module to the profile of its feature screen.
pub fn profile_for(module: ModuleKey) -> AppResult<Arc<dyn EntityProfile>> {
    let profile: Arc<dyn EntityProfile> = match module {
        ModuleKey::Roles => Arc::new(RoleProfile::new()?),
        ModuleKey::Grades => Arc::new(GradeProfile::new()?),
        ModuleKey::Subjects => Arc::new(SubjectProfile::new()?),
    };

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use campus_domain::ModuleKey;

    use super::profile_for;

    #[test]
    fn every_workspace_module_has_a_profile() {
        for module in ModuleKey::ALL {
            let profile = profile_for(module).unwrap_or_else(|_| unreachable!());
            assert_eq!(profile.config().api_endpoint(), module.as_str());
        }
    }
}

fn require_text(candidate: &EntityRecord, field: &str, message: &str) -> AppResult<()> {
    if candidate.str_at(field).trim().is_empty() {
        return Err(AppError::Validation(message.to_owned()));
    }

    Ok(())
}
