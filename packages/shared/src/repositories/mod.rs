pub mod errors;
pub mod status_check_repository;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;

/// Builds a DynamoDB client from the ambient AWS configuration.
/// `endpoint_url` points the client at a non-default endpoint such as DynamoDB Local.
pub async fn dynamodb_client(endpoint_url: Option<&str>) -> Client {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(url) = endpoint_url {
        builder = builder.endpoint_url(url);
    }
    Client::from_conf(builder.build())
}
