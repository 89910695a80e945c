#[derive(Debug)]
pub enum StatusCheckRepositoryError {
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for StatusCheckRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCheckRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            StatusCheckRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for StatusCheckRepositoryError {}
