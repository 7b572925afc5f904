use async_trait::async_trait;
use campus_core::AppResult;
use campus_domain::{EntityConfig, EntityRecord, RecordId, StatusFilter};

/// REST collection port bound to one entity endpoint.
///
/// Failures carry the HTTP status taxonomy of [`campus_core::AppError`];
/// transport failures surface as `AppError::Unavailable`.
#[async_trait]
pub trait EntityApiClient: Send + Sync {
    /// Lists records, passing `filter` as the `status` query parameter unless it is `All`.
    async fn list_records(&self, filter: StatusFilter) -> AppResult<Vec<EntityRecord>>;

    /// Creates a record and returns the server representation, if any was sent back.
    async fn create_record(&self, payload: EntityRecord) -> AppResult<Option<EntityRecord>>;

    /// Partially updates a record and returns the server representation, if any.
    async fn update_record(
        &self,
        id: &RecordId,
        payload: EntityRecord,
    ) -> AppResult<Option<EntityRecord>>;

    /// Deletes a record.
    async fn delete_record(&self, id: &RecordId) -> AppResult<()>;
}

/// Entity-specific hooks that specialize the generic CRUD engine for one screen.
pub trait EntityProfile: Send + Sync {
    /// Returns the static entity configuration.
    fn config(&self) -> &EntityConfig;

    /// Returns a blank record used to seed the create and edit modals.
    fn create_empty_entity(&self) -> EntityRecord;

    /// Validates a candidate before any network call.
    ///
    /// The message of a returned `AppError::Validation` is shown to the user.
    fn validate_entity(&self, candidate: &EntityRecord) -> AppResult<()>;

    /// Builds the `POST` body for a validated candidate.
    fn create_payload(&self, candidate: &EntityRecord) -> EntityRecord {
        candidate.with_trimmed_strings()
    }

    /// Builds the `PATCH` body for a validated candidate: editable fields only.
    fn update_payload(&self, candidate: &EntityRecord) -> EntityRecord {
        let config = self.config();
        let editable = [
            Some(config.name_field()),
            config.description_field(),
            Some(config.status_field()),
        ];

        candidate
            .project(editable.into_iter().flatten())
            .with_trimmed_strings()
    }
}
