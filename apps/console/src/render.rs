use std::fmt::Write;

use campus_application::{CrudEngine, ToastState};
use campus_domain::{EntityLayout, EntityRecord, WorkspaceModule};

pub fn render_workspace(modules: &[WorkspaceModule]) -> String {
    let mut output = String::from("Workspace\n");
    for module in modules {
        let _ = writeln!(
            output,
            "  {:<10} {}  ({})",
            module.key.as_str(),
            module.description,
            module.title
        );
    }
    output
}

/// Returns the toast line while the toast is visible.
pub fn render_toast(toast: &ToastState) -> Option<String> {
    toast
        .is_visible
        .then(|| format!("[{}] {}", toast.kind().as_str(), toast.message()))
}

/// Renders the list the way the screen lays it out: a table or a card grid.
pub fn render_entities(
    engine: &CrudEngine,
    filter_label: &str,
    entities: &[EntityRecord],
) -> String {
    let config = engine.config();
    let mut output = format!("{} ({filter_label})\n", config.entity_plural_name());
    if let Some(subtitle) = config.subtitle() {
        let _ = writeln!(output, "{subtitle}");
    }

    if entities.is_empty() {
        let _ = writeln!(
            output,
            "No {} to show.",
            config.entity_plural_name().to_lowercase()
        );
        return output;
    }

    match config.layout() {
        EntityLayout::Table => render_table(engine, entities, &mut output),
        EntityLayout::Grid => render_grid(engine, entities, &mut output),
    }
    output
}

fn status_label(is_active: bool) -> &'static str {
    if is_active { "active" } else { "inactive" }
}

fn id_label(engine: &CrudEngine, entity: &EntityRecord) -> String {
    engine
        .entity_id(entity)
        .map_or_else(|| "-".to_owned(), |id| id.to_string())
}

fn render_table(engine: &CrudEngine, entities: &[EntityRecord], output: &mut String) {
    let headers = engine.config().table_headers();
    let name_header = headers
        .and_then(|headers| headers.name.as_deref())
        .unwrap_or("Name");
    let status_header = headers
        .and_then(|headers| headers.status.as_deref())
        .unwrap_or("Status");

    let name_width = entities
        .iter()
        .map(|entity| engine.entity_name(Some(entity)).chars().count())
        .chain([name_header.chars().count()])
        .max()
        .unwrap_or(0);

    let _ = writeln!(output, "{:<6} {name_header:<name_width$} {status_header}", "ID");
    for entity in entities {
        let _ = writeln!(
            output,
            "{:<6} {:<name_width$} {}",
            id_label(engine, entity),
            engine.entity_name(Some(entity)),
            status_label(engine.entity_status(entity))
        );
    }
}

fn render_grid(engine: &CrudEngine, entities: &[EntityRecord], output: &mut String) {
    for entity in entities {
        let _ = writeln!(
            output,
            "[#{}] {} ({})",
            id_label(engine, entity),
            engine.entity_name(Some(entity)),
            status_label(engine.entity_status(entity))
        );
        let description = engine.entity_description(Some(entity));
        if !description.is_empty() {
            let _ = writeln!(output, "      {description}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use campus_application::{
        CrudEngine, EntityProfile, GradeProfile, NotificationService, RoleProfile, ToastState,
    };
    use campus_domain::{EntityRecord, Toast, ToastKind, workspace_modules};
    use campus_infrastructure::InMemoryEntityApiClient;

    use super::{render_entities, render_toast, render_workspace};

    fn engine(profile: Arc<dyn EntityProfile>) -> CrudEngine {
        let client = Arc::new(InMemoryEntityApiClient::new(profile.config().clone()));
        CrudEngine::new(profile, client, NotificationService::default())
    }

    #[test]
    fn workspace_lists_every_module() {
        let output = render_workspace(&workspace_modules());
        assert!(output.contains("roles"));
        assert!(output.contains("grades"));
        assert!(output.contains("subjects"));
    }

    #[test]
    fn hidden_toasts_render_nothing() {
        let toast = ToastState {
            toast: Toast::new("Saved", ToastKind::Success),
            is_visible: false,
        };
        assert_eq!(render_toast(&toast), None);

        let visible = ToastState {
            is_visible: true,
            ..toast
        };
        assert_eq!(render_toast(&visible).as_deref(), Some("[success] Saved"));
    }

    #[test]
    fn roles_render_as_a_table_with_configured_headers() {
        let engine = engine(Arc::new(
            RoleProfile::new().unwrap_or_else(|_| unreachable!()),
        ));
        let roles = [EntityRecord::new()
            .with("roleId", 1)
            .with("roleName", "Administrator")
            .with("roleStatus", true)];

        let output = render_entities(&engine, "Active Roles", &roles);
        assert!(output.contains("Role Name"));
        assert!(output.contains("Administrator"));
        assert!(output.contains("active"));
    }

    #[test]
    fn grades_render_as_cards_with_descriptions() {
        let engine = engine(Arc::new(
            GradeProfile::new().unwrap_or_else(|_| unreachable!()),
        ));
        let grades = [EntityRecord::new()
            .with("gradeId", 4)
            .with("gradeLevel", "8th Secondary")
            .with("gradeDescription", "Second year of secondary school")
            .with("gradeStatus", false)];

        let output = render_entities(&engine, "All Grades", &grades);
        assert!(output.contains("[#4] 8th Secondary (inactive)"));
        assert!(output.contains("Second year of secondary school"));
        assert!(render_entities(&engine, "All Grades", &[]).contains("No grades to show."));
    }
}
