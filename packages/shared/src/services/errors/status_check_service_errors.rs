use crate::repositories::errors::status_check_repository_errors::StatusCheckRepositoryError;

#[derive(Debug)]
pub enum StatusCheckServiceError {
    RepositoryError(StatusCheckRepositoryError),
}

impl std::fmt::Display for StatusCheckServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCheckServiceError::RepositoryError(err) => {
                write!(f, "Repository error: {}", err)
            }
        }
    }
}

impl std::error::Error for StatusCheckServiceError {}

impl From<StatusCheckRepositoryError> for StatusCheckServiceError {
    fn from(err: StatusCheckRepositoryError) -> Self {
        StatusCheckServiceError::RepositoryError(err)
    }
}
