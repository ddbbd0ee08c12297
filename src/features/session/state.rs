use serde::{Deserialize, Serialize};

use crate::features::users::User;
use crate::mvi::SliceState;

/// Process-wide session.
///
/// Two states only: anonymous (`user == None`) and authenticated.
/// Authentication is derived from `user`, never stored, so snapshots
/// written with an `isAuthenticated` field load fine and the field is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SliceState for SessionState {}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
