use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use campus_application::EntityApiClient;
use campus_core::{AppError, AppResult};
use campus_domain::{EntityConfig, EntityRecord, RecordId, StatusFilter};
use tokio::sync::RwLock;

/// In-memory entity collection with the REST semantics of the backend.
///
/// Used by the development api server and by the console in offline mode.
/// Names are unique per collection, compared case-insensitively.
pub struct InMemoryEntityApiClient {
    config: EntityConfig,
    records: RwLock<Vec<EntityRecord>>,
    is_unavailable: AtomicBool,
}

impl InMemoryEntityApiClient {
    /// Creates an empty collection.
    #[must_use]
    pub fn new(config: EntityConfig) -> Self {
        Self::with_records(config, Vec::new())
    }

    /// Creates a collection holding `records`.
    #[must_use]
    pub fn with_records(config: EntityConfig, records: Vec<EntityRecord>) -> Self {
        Self {
            config,
            records: RwLock::new(records),
            is_unavailable: AtomicBool::new(false),
        }
    }

    /// Returns the entity configuration the collection is keyed by.
    #[must_use]
    pub fn config(&self) -> &EntityConfig {
        &self.config
    }

    /// Makes every subsequent call fail as unreachable, or restores service.
    pub fn set_unavailable(&self, is_unavailable: bool) {
        self.is_unavailable.store(is_unavailable, Ordering::SeqCst);
    }

    /// Returns a single record.
    pub async fn find_record(&self, id: &RecordId) -> AppResult<EntityRecord> {
        self.ensure_available()?;
        let records = self.records.read().await;
        let index = self.position(&records, id)?;
        Ok(records[index].clone())
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.is_unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Unavailable(format!(
                "{} collection is unreachable",
                self.config.api_endpoint()
            )));
        }

        Ok(())
    }

    fn position(&self, records: &[EntityRecord], id: &RecordId) -> AppResult<usize> {
        records
            .iter()
            .position(|record| record.id_at(self.config.id_field()).as_ref() == Some(id))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} '{id}' does not exist",
                    self.config.entity_name().to_lowercase()
                ))
            })
    }

    fn required_name<'a>(&self, record: &'a EntityRecord) -> AppResult<&'a str> {
        let name = record.str_at(self.config.name_field()).trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(format!(
                "field '{}' is required",
                self.config.name_field()
            )));
        }

        Ok(name)
    }

    fn ensure_unique_name(
        &self,
        records: &[EntityRecord],
        name: &str,
        except: Option<&RecordId>,
    ) -> AppResult<()> {
        let name_field = self.config.name_field();
        let taken = records.iter().any(|record| {
            let id = record.id_at(self.config.id_field());
            id.as_ref() != except && record.str_at(name_field).trim().eq_ignore_ascii_case(name)
        });

        if taken {
            return Err(AppError::Conflict(format!(
                "{} '{name}' already exists",
                self.config.entity_name().to_lowercase()
            )));
        }

        Ok(())
    }

    fn next_id(&self, records: &[EntityRecord]) -> RecordId {
        let highest = records
            .iter()
            .filter_map(|record| record.id_at(self.config.id_field()))
            .filter_map(|id| id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        RecordId::from(highest.saturating_add(1))
    }
}

#[async_trait]
impl EntityApiClient for InMemoryEntityApiClient {
    async fn list_records(&self, filter: StatusFilter) -> AppResult<Vec<EntityRecord>> {
        self.ensure_available()?;
        let status_field = self.config.status_field();

        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| filter.matches(record.bool_at(status_field)))
            .cloned()
            .collect())
    }

    async fn create_record(&self, payload: EntityRecord) -> AppResult<Option<EntityRecord>> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let name = self.required_name(&payload)?;
        self.ensure_unique_name(&records, name, None)?;

        let id = self.next_id(&records);
        let mut created = payload.with_trimmed_strings();
        created.set(self.config.id_field(), id.to_value());
        if created.get(self.config.status_field()).is_none() {
            created.set(self.config.status_field(), true);
        }

        records.push(created.clone());
        Ok(Some(created))
    }

    async fn update_record(
        &self,
        id: &RecordId,
        payload: EntityRecord,
    ) -> AppResult<Option<EntityRecord>> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let index = self.position(&records, id)?;

        if payload.get(self.config.name_field()).is_some() {
            let name = self.required_name(&payload)?;
            self.ensure_unique_name(&records, name, Some(id))?;
        }

        let mut updated = records[index].merged_with(&payload.with_trimmed_strings());
        updated.set(self.config.id_field(), id.to_value());
        records[index] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete_record(&self, id: &RecordId) -> AppResult<()> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let index = self.position(&records, id)?;
        records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use campus_application::{EntityApiClient, EntityProfile, SubjectProfile};
    use campus_core::AppError;
    use campus_domain::{EntityRecord, RecordId, StatusFilter};

    use super::InMemoryEntityApiClient;

    fn collection() -> InMemoryEntityApiClient {
        let profile = SubjectProfile::new().unwrap_or_else(|_| unreachable!());
        InMemoryEntityApiClient::new(profile.config().clone())
    }

    fn subject(name: &str) -> EntityRecord {
        EntityRecord::new()
            .with("subjectName", name)
            .with("subjectDescription", "About it")
            .with("subjectStatus", true)
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let collection = collection();
        let first = collection
            .create_record(subject("Mathematics"))
            .await
            .unwrap_or_else(|_| unreachable!());
        let second = collection
            .create_record(subject("History"))
            .await
            .unwrap_or_else(|_| unreachable!());

        let ids: Vec<_> = [first, second]
            .iter()
            .flatten()
            .map(|record| record.id_at("subjectID"))
            .collect();
        assert_eq!(ids, vec![Some(RecordId::from(1)), Some(RecordId::from(2))]);
    }

    #[tokio::test]
    async fn duplicate_names_conflict_case_insensitively() {
        let collection = collection();
        let _ = collection.create_record(subject("History")).await;
        let result = collection.create_record(subject(" history ")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn blank_name_is_a_bad_request() {
        let collection = collection();
        let result = collection.create_record(subject("  ")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn list_applies_status_filter() {
        let collection = collection();
        let _ = collection.create_record(subject("Mathematics")).await;
        let _ = collection
            .create_record(subject("Sciences").with("subjectStatus", false))
            .await;

        let inactive = collection
            .list_records(StatusFilter::Inactive)
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].str_at("subjectName"), "Sciences");

        let all = collection
            .list_records(StatusFilter::All)
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn update_merges_fields_and_keeps_identifier() {
        let collection = collection();
        let _ = collection.create_record(subject("Mathematics")).await;
        let id = RecordId::from(1);

        let updated = collection
            .update_record(
                &id,
                EntityRecord::new()
                    .with("subjectDescription", " Numbers ")
                    .with("subjectID", 99),
            )
            .await
            .unwrap_or_else(|_| unreachable!())
            .unwrap_or_else(|| unreachable!());

        assert_eq!(updated.str_at("subjectName"), "Mathematics");
        assert_eq!(updated.str_at("subjectDescription"), "Numbers");
        assert_eq!(updated.id_at("subjectID"), Some(id));
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let collection = collection();
        let id = RecordId::from(7);
        assert!(matches!(
            collection.delete_record(&id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            collection.update_record(&id, subject("Ghost")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn unavailable_collection_rejects_every_call() {
        let collection = collection();
        collection.set_unavailable(true);
        assert!(matches!(
            collection.list_records(StatusFilter::All).await,
            Err(AppError::Unavailable(_))
        ));

        collection.set_unavailable(false);
        assert!(collection.list_records(StatusFilter::All).await.is_ok());
    }
}
