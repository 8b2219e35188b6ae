use tracing::error;

/// Logging collaborator handed to each service; records the failing
/// operation together with the underlying database error.
#[derive(Debug, Clone, Default)]
pub struct FailureLog;

impl FailureLog {
    pub fn persistence_failure(&self, operation: &'static str, error: &sqlx::Error) {
        error!(operation, error = %error, "fallo de persistencia");
    }
}
