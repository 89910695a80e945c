use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::new_id;
use crate::models::status_check::{StatusCheck, StatusCheckDocument};
use crate::repositories::status_check_repository::StatusCheckRepository;
use crate::services::errors::status_check_service_errors::StatusCheckServiceError;

/// Maximum number of records returned by a listing.
pub const STATUS_CHECK_LIST_LIMIT: usize = 1000;

pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct StatusCheckService {
    repository: Arc<dyn StatusCheckRepository + Send + Sync>,
    id_generator: IdGenerator,
    clock: Clock,
}

impl StatusCheckService {
    pub fn new(repository: Arc<dyn StatusCheckRepository + Send + Sync>) -> Self {
        StatusCheckService::with_generators(repository, Arc::new(new_id), Arc::new(Utc::now))
    }

    pub fn with_generators(
        repository: Arc<dyn StatusCheckRepository + Send + Sync>,
        id_generator: IdGenerator,
        clock: Clock,
    ) -> Self {
        StatusCheckService {
            repository,
            id_generator,
            clock,
        }
    }

    pub async fn create_status_check(
        &self,
        client_name: &str,
    ) -> Result<StatusCheck, StatusCheckServiceError> {
        let status_check =
            StatusCheck::with_parts((self.id_generator)(), client_name, (self.clock)());
        self.repository
            .insert_status_check(&StatusCheckDocument::from(&status_check))
            .await?;
        debug!(
            "Status check {} recorded for {}",
            status_check.id, status_check.client_name
        );
        Ok(status_check)
    }

    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, StatusCheckServiceError> {
        let documents = self
            .repository
            .list_status_checks(STATUS_CHECK_LIST_LIMIT)
            .await?;
        Ok(documents
            .into_iter()
            .map(|document| self.restore(document))
            .collect())
    }

    /// Unreadable or missing timestamps are replaced with the current time.
    fn restore(&self, document: StatusCheckDocument) -> StatusCheck {
        let timestamp = match document.parse_timestamp() {
            Some(timestamp) => timestamp,
            None => {
                warn!(
                    "Status check {} has unreadable timestamp {:?}, substituting current time",
                    document.id, document.timestamp
                );
                (self.clock)()
            }
        };
        document.into_status_check(timestamp)
    }
}
