use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use configs::LatencyConfig;
use models::seed::seed_users;
use models::user::{User, UserPatch};

use crate::errors::StoreError;

/// Trait abstraction for the remote side of the user store.
///
/// The store only talks to this trait, so the simulated-latency mock can
/// be replaced by a real HTTP/database client without touching the store.
/// Implementations acknowledge writes; the store owns the collection.
#[async_trait]
pub trait UserBackend: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError>;
    async fn create_user(&self, user: User) -> Result<User, StoreError>;
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<(), StoreError>;
    async fn delete_user(&self, id: &str) -> Result<(), StoreError>;
}

/// Stand-in remote: sleeps the configured latency, then answers.
///
/// Fetch resolves to the fixed seed list; writes are acknowledged as-is.
/// Flipping [`MockBackend::set_failing`] makes every subsequent call fail
/// with its operation's error, which is the only failure mode this system
/// has. A started call always runs to completion; nothing aborts the
/// sleep.
pub struct MockBackend {
    latency: LatencyConfig,
    seed: Vec<User>,
    failing: AtomicBool,
}

impl MockBackend {
    pub fn new(latency: LatencyConfig) -> Self {
        Self::with_seed(latency, seed_users())
    }

    /// Mock serving a caller-chosen dataset instead of the default seed.
    pub fn with_seed(latency: LatencyConfig, seed: Vec<User>) -> Self {
        Self { latency, seed, failing: AtomicBool::new(false) }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self, on_fail: StoreError) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(on_fail)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserBackend for MockBackend {
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        tokio::time::sleep(self.latency.fetch()).await;
        self.check(StoreError::Fetch)?;
        Ok(self.seed.clone())
    }

    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        tokio::time::sleep(self.latency.create()).await;
        self.check(StoreError::Create)?;
        Ok(user)
    }

    async fn update_user(&self, _id: &str, _patch: &UserPatch) -> Result<(), StoreError> {
        tokio::time::sleep(self.latency.update()).await;
        self.check(StoreError::Update)
    }

    async fn delete_user(&self, _id: &str) -> Result<(), StoreError> {
        tokio::time::sleep(self.latency.delete()).await;
        self.check(StoreError::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_seed_list() -> Result<(), anyhow::Error> {
        let backend = MockBackend::new(LatencyConfig::instant());
        let users = backend.fetch_users().await?;
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, "1");
        Ok(())
    }

    #[tokio::test]
    async fn failing_switch_maps_to_per_op_errors() {
        let backend = MockBackend::new(LatencyConfig::instant());
        backend.set_failing(true);
        assert_eq!(backend.fetch_users().await, Err(StoreError::Fetch));
        assert_eq!(backend.delete_user("1").await, Err(StoreError::Delete));

        backend.set_failing(false);
        assert!(backend.delete_user("1").await.is_ok());
    }

    #[tokio::test]
    async fn create_echoes_the_record() -> Result<(), anyhow::Error> {
        let backend = MockBackend::with_seed(LatencyConfig::instant(), Vec::new());
        let user = seed_users().remove(0);
        let echoed = backend.create_user(user.clone()).await?;
        assert_eq!(echoed, user);
        Ok(())
    }
}
