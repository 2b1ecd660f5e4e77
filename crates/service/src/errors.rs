use thiserror::Error;

/// Store operation failures. One variant per operation, each carrying the
/// fixed user-facing message the UI shows; there is no structured cause.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Failed to fetch users")]
    Fetch,
    #[error("Failed to create user")]
    Create,
    #[error("Failed to update user")]
    Update,
    #[error("Failed to delete user")]
    Delete,
}
