use crate::features::users::state::User;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    SetAll(Vec<User>),
    /// Append to the end of the list.
    Add(User),
    /// Replace the entry with the same email. No-op when absent.
    Update(User),
    RemoveByEmail(String),
}

impl Intent for UsersIntent {}
