//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod entity_config;
mod filter;
mod notification;
mod record;
mod workspace;

pub use entity_config::{
    EntityConfig, EntityConfigInput, EntityLayout, GrammaticalGender, TableHeaders,
};
pub use filter::{FilterOption, StatusFilter, filter_options, status_icon};
pub use notification::{Toast, ToastKind};
pub use record::{EntityRecord, RecordId};
pub use workspace::{ModuleKey, WorkspaceModule, workspace_modules};
