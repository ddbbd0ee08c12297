use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// A registered account.
///
/// `email` is the lookup key. Uniqueness is enforced by the signup flow,
/// not by the collection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    /// Stored and compared as plain text.
    pub password: String,
    /// Opaque image data (usually a `data:` URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            avatar: None,
            phone: None,
            address: None,
        }
    }

    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"••••••••")
            .field("avatar", &self.avatar.as_ref().map(|a| a.len()))
            .field("phone", &self.phone)
            .field("address", &self.address)
            .finish()
    }
}

/// Ordered list of registered users, persisted as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsersState {
    pub users: Vec<User>,
}

impl SliceState for UsersState {}

impl UsersState {
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }
}
