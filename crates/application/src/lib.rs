//! Application services and ports.

#![forbid(unsafe_code)]

mod crud_engine;
mod crud_ports;
mod notification_service;
mod profiles;

pub use crud_engine::{CrudEngine, DeleteModal, EntityModal, ModalState};
pub use crud_ports::{EntityApiClient, EntityProfile};
pub use notification_service::{DEFAULT_TOAST_DURATION, NotificationService, ToastState};
pub use profiles::{GradeProfile, RoleProfile, SubjectProfile, profile_for};
