use async_trait::async_trait;
use campus_application::EntityApiClient;
use campus_core::{AppError, AppResult};
use campus_domain::{EntityRecord, RecordId, StatusFilter};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// REST adapter for one entity collection, e.g. `{base}/grades`.
pub struct HttpEntityApiClient {
    http_client: reqwest::Client,
    collection_url: Url,
}

impl HttpEntityApiClient {
    /// Creates a client for `endpoint` below `base_url`.
    pub fn new(http_client: reqwest::Client, base_url: &Url, endpoint: &str) -> AppResult<Self> {
        let endpoint = endpoint.trim().trim_matches('/');
        if endpoint.is_empty() {
            return Err(AppError::Validation(
                "entity endpoint must not be empty".to_owned(),
            ));
        }

        let collection_url = Url::parse(&format!(
            "{}/{endpoint}",
            base_url.as_str().trim_end_matches('/')
        ))
        .map_err(|error| {
            AppError::Validation(format!(
                "invalid collection url for endpoint '{endpoint}': {error}"
            ))
        })?;

        if collection_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "api base url '{base_url}' cannot address collections"
            )));
        }

        Ok(Self {
            http_client,
            collection_url,
        })
    }

    /// Returns the collection url.
    #[must_use]
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn record_url(&self, id: &RecordId) -> AppResult<Url> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal(format!(
                    "collection url '{}' cannot address records",
                    self.collection_url
                ))
            })?
            .push(id.as_str());
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> AppResult<Option<Value>> {
        let response = request.send().await.map_err(|error| {
            AppError::Unavailable(format!(
                "request to '{}' failed: {error}",
                self.collection_url
            ))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            AppError::Unavailable(format!("failed to read response body: {error}"))
        })?;
        debug!(status = status.as_u16(), url = %self.collection_url, "entity api response");

        if !status.is_success() {
            return Err(AppError::from_status(
                status.as_u16(),
                error_message(status, &body),
            ));
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&body).map_err(|error| {
            AppError::Internal(format!("entity api returned invalid JSON: {error}"))
        })?;

        Ok((!value.is_null()).then_some(value))
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
    });

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => format!("entity api responded with status {status}"),
        None => body.trim().to_owned(),
    }
}

fn into_record(value: Option<Value>) -> AppResult<Option<EntityRecord>> {
    value.map(EntityRecord::from_value).transpose()
}

#[async_trait]
impl EntityApiClient for HttpEntityApiClient {
    async fn list_records(&self, filter: StatusFilter) -> AppResult<Vec<EntityRecord>> {
        let mut url = self.collection_url.clone();
        if let Some(status) = filter.query_value() {
            url.query_pairs_mut().append_pair("status", status);
        }

        match self.send(self.http_client.get(url)).await? {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items.into_iter().map(EntityRecord::from_value).collect(),
            Some(other) => Err(AppError::Internal(format!(
                "entity list response must be a JSON array, got '{other}'"
            ))),
        }
    }

    async fn create_record(&self, payload: EntityRecord) -> AppResult<Option<EntityRecord>> {
        let request = self
            .http_client
            .post(self.collection_url.clone())
            .json(&payload);
        into_record(self.send(request).await?)
    }

    async fn update_record(
        &self,
        id: &RecordId,
        payload: EntityRecord,
    ) -> AppResult<Option<EntityRecord>> {
        let request = self.http_client.patch(self.record_url(id)?).json(&payload);
        into_record(self.send(request).await?)
    }

    async fn delete_record(&self, id: &RecordId) -> AppResult<()> {
        self.send(self.http_client.delete(self.record_url(id)?))
            .await?;
        Ok(())
    }
}
