use campus_domain::{EntityRecord, ModuleKey};

/// Demo records for a module's collection, as served by the development backend.
#[must_use]
pub fn seed_records(module: ModuleKey) -> Vec<EntityRecord> {
    match module {
        ModuleKey::Roles => vec![
            role(1, "Administrator", "Full access to the admin console", true),
            role(2, "Teacher", "Manages grades and subjects", true),
            role(3, "Guardian", "Read-only access for families", false),
        ],
        ModuleKey::Grades => vec![
            grade(1, "1st Primary", "First year of primary school", true),
            grade(2, "2nd Primary", "Second year of primary school", true),
            grade(3, "7th Secondary", "First year of secondary school", false),
            grade(4, "8th Secondary", "Second year of secondary school", true),
        ],
        ModuleKey::Subjects => vec![
            subject(1, "Mathematics", "Numbers, algebra and geometry", true),
            subject(2, "Language", "Reading comprehension and writing", true),
            subject(3, "Natural Sciences", "Biology, chemistry and physics", false),
            subject(4, "History", "World and national history", true),
        ],
    }
}

fn role(id: u64, name: &str, description: &str, is_active: bool) -> EntityRecord {
    EntityRecord::new()
        .with("roleId", id)
        .with("roleName", name)
        .with("description", description)
        .with("roleStatus", is_active)
        .with("name", name)
        .with("status", is_active)
}

fn grade(id: u64, level: &str, description: &str, is_active: bool) -> EntityRecord {
    EntityRecord::new()
        .with("gradeId", id)
        .with("gradeLevel", level)
        .with("gradeDescription", description)
        .with("gradeStatus", is_active)
}

fn subject(id: u64, name: &str, description: &str, is_active: bool) -> EntityRecord {
    EntityRecord::new()
        .with("subjectID", id)
        .with("subjectName", name)
        .with("subjectDescription", description)
        .with("subjectStatus", is_active)
}
