use campus_domain::{EntityRecord, FilterOption, StatusFilter, filter_options};

/// Open/closed flag, working copy and in-flight flag of one modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<W> {
    /// Whether the modal is displayed.
    pub is_open: bool,
    /// Record the modal acts on.
    pub working: W,
    /// Whether a submission is in flight; further submissions are ignored.
    pub is_busy: bool,
}

impl<W> ModalState<W> {
    pub(super) fn closed(working: W) -> Self {
        Self {
            is_open: false,
            working,
            is_busy: false,
        }
    }
}

/// Create and edit modals hold a detached working copy.
pub type EntityModal = ModalState<EntityRecord>;

/// The delete modal holds the target record itself, or nothing.
pub type DeleteModal = ModalState<Option<EntityRecord>>;

#[derive(Debug)]
pub(super) struct CrudState {
    pub(super) entities: Vec<EntityRecord>,
    pub(super) selected_filter: StatusFilter,
    pub(super) selected_filter_label: String,
    pub(super) filter_options: Vec<FilterOption>,
    pub(super) is_filter_dropdown_open: bool,
    pub(super) is_loading: bool,
    pub(super) create_modal: EntityModal,
    pub(super) edit_modal: EntityModal,
    pub(super) delete_modal: DeleteModal,
}

impl CrudState {
    pub(super) fn new(entity_plural_name: &str, empty: EntityRecord) -> Self {
        let filter_options = filter_options(entity_plural_name);
        let selected_filter = StatusFilter::default();
        let selected_filter_label = default_filter_label(&filter_options, entity_plural_name);

        Self {
            entities: Vec::new(),
            selected_filter,
            selected_filter_label,
            filter_options,
            is_filter_dropdown_open: false,
            is_loading: false,
            create_modal: ModalState::closed(empty.clone()),
            edit_modal: ModalState::closed(empty),
            delete_modal: ModalState::closed(None),
        }
    }
}

pub(super) fn default_filter_label(options: &[FilterOption], entity_plural_name: &str) -> String {
    options
        .iter()
        .find(|option| option.value == StatusFilter::Active)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| format!("Active {entity_plural_name}"))
}
