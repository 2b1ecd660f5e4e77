//! Observable store state and its transition function.
//!
//! `UserState` is what subscribers render: the ordered collection, a
//! pending-operation counter, and the last error message. Every mutation
//! anywhere in the system goes through [`reduce`]; nothing else touches
//! the fields.

use models::user::{User, UserPatch};

#[derive(Clone, Debug, Default)]
pub struct UserState {
    /// Users in insertion order; `load` replaces this wholesale.
    pub users: Vec<User>,
    /// Number of operations currently in flight. A counter rather than a
    /// boolean so one operation finishing cannot clear another's
    /// pending indication.
    pending: u32,
    /// Last operation failure message, cleared when a load starts.
    pub error: Option<String>,
}

impl UserState {
    /// True while any operation is in flight.
    pub fn loading(&self) -> bool {
        self.pending > 0
    }

    pub fn pending_ops(&self) -> u32 {
        self.pending
    }
}

/// State transitions. Mirrors the operation set of the store one-to-one
/// plus the pending/error bookkeeping around each async call.
#[derive(Clone, Debug)]
pub enum Action {
    OpStarted,
    OpFinished,
    SetError(Option<String>),
    SetUsers(Vec<User>),
    AddUser(User),
    UpdateUser { id: String, patch: UserPatch },
    DeleteUser { id: String },
}

/// Apply one action. Unknown ids in `UpdateUser`/`DeleteUser` leave the
/// collection untouched; update keeps the record's position.
pub fn reduce(state: &mut UserState, action: Action) {
    match action {
        Action::OpStarted => state.pending += 1,
        Action::OpFinished => state.pending = state.pending.saturating_sub(1),
        Action::SetError(error) => state.error = error,
        Action::SetUsers(users) => state.users = users,
        Action::AddUser(user) => state.users.push(user),
        Action::UpdateUser { id, patch } => {
            if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                patch.apply(user);
            }
        }
        Action::DeleteUser { id } => state.users.retain(|u| u.id != id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::seed::seed_users;

    #[test]
    fn pending_counter_tracks_nesting() {
        let mut s = UserState::default();
        assert!(!s.loading());
        reduce(&mut s, Action::OpStarted);
        reduce(&mut s, Action::OpStarted);
        reduce(&mut s, Action::OpFinished);
        assert!(s.loading(), "one op still in flight");
        reduce(&mut s, Action::OpFinished);
        assert!(!s.loading());
    }

    #[test]
    fn op_finished_never_underflows() {
        let mut s = UserState::default();
        reduce(&mut s, Action::OpFinished);
        assert_eq!(s.pending_ops(), 0);
    }

    #[test]
    fn update_preserves_position() {
        let mut s = UserState { users: seed_users(), ..Default::default() };
        let patch = UserPatch { name: Some("Janet Smith".into()), ..Default::default() };
        reduce(&mut s, Action::UpdateUser { id: "2".into(), patch });
        assert_eq!(s.users[1].name, "Janet Smith");
        assert_eq!(s.users[1].email, "jane.smith@example.com");
        assert_eq!(s.users.len(), 3);
    }

    #[test]
    fn update_unknown_id_is_silent_noop() {
        let mut s = UserState { users: seed_users(), ..Default::default() };
        let before = s.users.clone();
        let patch = UserPatch { name: Some("Nobody".into()), ..Default::default() };
        reduce(&mut s, Action::UpdateUser { id: "404".into(), patch });
        assert_eq!(s.users, before);
        assert!(s.error.is_none());
    }

    #[test]
    fn delete_unknown_id_is_silent_noop() {
        let mut s = UserState { users: seed_users(), ..Default::default() };
        reduce(&mut s, Action::DeleteUser { id: "404".into() });
        assert_eq!(s.users.len(), 3);
    }
}
