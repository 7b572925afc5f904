use campus_core::AppError;
use campus_domain::{EntityConfig, ToastKind};

/// Mutation whose failure is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CrudAction {
    Create,
    Update,
    Delete,
}

impl CrudAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "edit",
            Self::Delete => "delete",
        }
    }
}

/// What the engine does with the modal after a failed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FailureResolution {
    /// Keep the modal open so the user can correct and retry.
    RetryInPlace,
    /// The target no longer exists: close the modal and reload.
    CloseAndReload,
    /// Backend unreachable during delete: drop the target from the local list.
    RemoveLocally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FailureOutcome {
    pub(super) message: String,
    pub(super) kind: ToastKind,
    pub(super) resolution: FailureResolution,
}

impl FailureOutcome {
    fn retry(message: String) -> Self {
        Self {
            message,
            kind: ToastKind::Error,
            resolution: FailureResolution::RetryInPlace,
        }
    }
}

pub(super) fn resolve_failure(
    config: &EntityConfig,
    action: CrudAction,
    error: &AppError,
    target_name: &str,
) -> FailureOutcome {
    let entity = config.entity_name().to_lowercase();
    let verb = action.verb();

    match (action, error) {
        (_, AppError::BadRequest(_) | AppError::Validation(_)) => FailureOutcome::retry(
            "Invalid data. Please check the information.".to_owned(),
        ),
        (_, AppError::Forbidden(_)) => FailureOutcome::retry(format!(
            "You do not have permission to {verb} this {entity}."
        )),
        (CrudAction::Create, AppError::Conflict(_)) => {
            FailureOutcome::retry(format!("A {entity} with that name already exists."))
        }
        (CrudAction::Update | CrudAction::Delete, AppError::NotFound(_)) => FailureOutcome {
            message: format!("The {entity} was not found. It may have been deleted."),
            kind: ToastKind::Error,
            resolution: FailureResolution::CloseAndReload,
        },
        (CrudAction::Delete, AppError::Unavailable(_)) => FailureOutcome {
            message: format!(
                "Server unreachable. {} \"{target_name}\" was removed locally.",
                config.entity_name()
            ),
            kind: ToastKind::Info,
            resolution: FailureResolution::RemoveLocally,
        },
        _ => FailureOutcome::retry(format!("Failed to {verb} {entity}. Please try again.")),
    }
}
