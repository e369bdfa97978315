/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.corrupted")]
    Corrupted,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.unavailable")]
    Unavailable,
}
