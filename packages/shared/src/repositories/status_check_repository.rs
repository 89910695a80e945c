use std::collections::HashMap;
use std::future::Future;

use crate::models::status_check::StatusCheckDocument;
use crate::repositories::errors::status_check_repository_errors::StatusCheckRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::{SecondsFormat, Utc};
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};

#[cfg(test)]
use mockall::automock;

/// Partition key attribute. Every status check shares one partition so a
/// `Query` can walk them in sort key order.
pub const PARTITION_KEY: &str = "collection_name";
/// Sort key attribute, `<creation instant, fixed-width UTC>#<id>`.
pub const SORT_KEY: &str = "insertion_key";
pub const COLLECTION_NAME: &str = "status_checks";

type Item = HashMap<String, AttributeValue>;

pub struct DynamoDbStatusCheckRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbStatusCheckRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    async fn insert_status_check(
        &self,
        document: &StatusCheckDocument,
    ) -> Result<(), StatusCheckRepositoryError>;

    /// Returns at most `limit` documents, oldest insertion first.
    async fn list_status_checks(
        &self,
        limit: usize,
    ) -> Result<Vec<StatusCheckDocument>, StatusCheckRepositoryError>;
}

/// Sort key that orders items by creation instant, ties broken by id.
/// Documents without a readable timestamp are keyed at the current instant.
pub fn insertion_key(document: &StatusCheckDocument) -> String {
    let created_at = document.parse_timestamp().unwrap_or_else(Utc::now);
    format!(
        "{}#{}",
        created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
        document.id
    )
}

/// Follows `LastEvaluatedKey` continuations until `limit` documents are
/// collected or the store has no more pages.
async fn collect_pages<F, Fut>(
    limit: usize,
    mut fetch_page: F,
) -> Result<Vec<StatusCheckDocument>, StatusCheckRepositoryError>
where
    F: FnMut(i32, Option<Item>) -> Fut,
    Fut: Future<Output = Result<(Vec<Item>, Option<Item>), StatusCheckRepositoryError>>,
{
    let mut documents = Vec::new();
    if limit == 0 {
        return Ok(documents);
    }

    let mut exclusive_start_key = None;
    loop {
        let remaining = limit - documents.len();
        let (items, last_evaluated_key) =
            fetch_page(i32::try_from(remaining).unwrap_or(i32::MAX), exclusive_start_key).await?;

        let page: Vec<StatusCheckDocument> = from_items(items)
            .map_err(|e| StatusCheckRepositoryError::Serialization(e.to_string()))?;
        documents.extend(page);

        exclusive_start_key = last_evaluated_key;
        if documents.len() >= limit || exclusive_start_key.is_none() {
            break;
        }
    }

    documents.truncate(limit);
    Ok(documents)
}

#[async_trait]
impl StatusCheckRepository for DynamoDbStatusCheckRepository {
    async fn insert_status_check(
        &self,
        document: &StatusCheckDocument,
    ) -> Result<(), StatusCheckRepositoryError> {
        let mut item: Item = to_item(document)
            .map_err(|e| StatusCheckRepositoryError::Serialization(e.to_string()))?;
        item.insert(
            PARTITION_KEY.to_string(),
            AttributeValue::S(COLLECTION_NAME.to_string()),
        );
        item.insert(
            SORT_KEY.to_string(),
            AttributeValue::S(insertion_key(document)),
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StatusCheckRepositoryError::DynamoDb(e.to_string()))?;
        Ok(())
    }

    async fn list_status_checks(
        &self,
        limit: usize,
    ) -> Result<Vec<StatusCheckDocument>, StatusCheckRepositoryError> {
        collect_pages(limit, |page_limit, exclusive_start_key| {
            let request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(format!("{} = :collection", PARTITION_KEY))
                .expression_attribute_values(
                    ":collection",
                    AttributeValue::S(COLLECTION_NAME.to_string()),
                )
                .scan_index_forward(true)
                .limit(page_limit)
                .set_exclusive_start_key(exclusive_start_key);
            async move {
                let output = request
                    .send()
                    .await
                    .map_err(|e| StatusCheckRepositoryError::DynamoDb(e.to_string()))?;
                Ok((output.items.unwrap_or_default(), output.last_evaluated_key))
            }
        })
        .await
    }
}
