use crate::features::users::User;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    SignIn(User),
    SignOut,
}

impl Intent for SessionIntent {}
