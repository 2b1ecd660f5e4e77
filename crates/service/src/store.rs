use std::sync::Arc;

use configs::StoreConfig;
use models::user::{CreateUserRequest, User, UserPatch};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::{MockBackend, UserBackend};
use crate::errors::StoreError;
use crate::state::{reduce, Action, UserState};

/// Handle to the user collection. Cheap to clone; construct one at
/// application start and hand copies to every consumer.
///
/// State is published through a `watch` channel: each completed operation
/// applies its transition atomically via `send_modify`, so subscribers
/// only ever observe fully-applied states. Each async operation returns a
/// `Result` that doubles as its completion token; the aggregate
/// pending/error view lives in [`UserState`].
///
/// Operations complete in the order their backend latencies elapse, not
/// the order they were issued. There is no cancellation: a call that has
/// reached the backend always runs to completion.
#[derive(Clone)]
pub struct UserStore {
    backend: Arc<dyn UserBackend>,
    state: watch::Sender<UserState>,
}

impl UserStore {
    pub fn new(backend: Arc<dyn UserBackend>) -> Self {
        let (state, _) = watch::channel(UserState::default());
        Self { backend, state }
    }

    /// Store wired to the stand-in backend with the configured latencies.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::new(Arc::new(MockBackend::new(config.latency.clone())))
    }

    /// Subscribe to state snapshots. The receiver always starts with the
    /// current state.
    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.state.subscribe()
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> UserState {
        self.state.borrow().clone()
    }

    /// Pure lookup against the current snapshot. No latency, no
    /// pending/error interaction.
    pub fn get_by_id(&self, id: &str) -> Option<User> {
        self.state.borrow().users.iter().find(|u| u.id == id).cloned()
    }

    /// Fetch the full user list and replace the collection.
    ///
    /// Clears any previous error on entry, so calling `load` again is the
    /// manual retry that dismisses an error banner. On failure the
    /// collection is left as it was.
    pub async fn load(&self) -> Result<(), StoreError> {
        self.state.send_modify(|s| {
            reduce(s, Action::OpStarted);
            reduce(s, Action::SetError(None));
        });
        let result = match self.backend.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), "loaded user list");
                self.apply(Action::SetUsers(users));
                Ok(())
            }
            Err(err) => {
                warn!(%err, "user list load failed");
                self.apply(Action::SetError(Some(err.to_string())));
                Err(err)
            }
        };
        self.apply(Action::OpFinished);
        result
    }

    /// Create a user from a request and append it to the collection.
    ///
    /// No validation happens here; that burden sits with the caller (see
    /// `models::validation`). Derived fields are filled by
    /// [`User::from_request`].
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, StoreError> {
        self.apply(Action::OpStarted);
        let user = User::from_request(request);
        let result = match self.backend.create_user(user).await {
            Ok(user) => {
                info!(id = %user.id, "created user");
                self.apply(Action::AddUser(user.clone()));
                Ok(user)
            }
            Err(err) => {
                warn!(%err, "user create failed");
                self.apply(Action::SetError(Some(err.to_string())));
                Err(err)
            }
        };
        self.apply(Action::OpFinished);
        result
    }

    /// Merge `patch` over the user with `id`, preserving its position.
    ///
    /// An unknown id mutates nothing and reports `Ok(false)`; callers
    /// that don't care can ignore the flag.
    pub async fn update(&self, id: &str, patch: UserPatch) -> Result<bool, StoreError> {
        self.apply(Action::OpStarted);
        let result = match self.backend.update_user(id, &patch).await {
            Ok(()) => {
                let mut found = false;
                self.state.send_modify(|s| {
                    found = s.users.iter().any(|u| u.id == id);
                    reduce(s, Action::UpdateUser { id: id.to_string(), patch });
                });
                debug!(%id, found, "updated user");
                Ok(found)
            }
            Err(err) => {
                warn!(%err, %id, "user update failed");
                self.apply(Action::SetError(Some(err.to_string())));
                Err(err)
            }
        };
        self.apply(Action::OpFinished);
        result
    }

    /// Remove the user with `id` if present. Idempotent; reports whether
    /// a record was actually removed.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.apply(Action::OpStarted);
        let result = match self.backend.delete_user(id).await {
            Ok(()) => {
                let mut existed = false;
                self.state.send_modify(|s| {
                    existed = s.users.iter().any(|u| u.id == id);
                    reduce(s, Action::DeleteUser { id: id.to_string() });
                });
                debug!(%id, existed, "deleted user");
                Ok(existed)
            }
            Err(err) => {
                warn!(%err, %id, "user delete failed");
                self.apply(Action::SetError(Some(err.to_string())));
                Err(err)
            }
        };
        self.apply(Action::OpFinished);
        result
    }

    fn apply(&self, action: Action) {
        self.state.send_modify(|s| reduce(s, action));
    }
}
