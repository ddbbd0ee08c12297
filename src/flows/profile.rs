//! Profile editing.

use crate::features::session::SessionIntent;
use crate::features::users::{User, UsersIntent};
use crate::notify::Notifier;
use crate::store::{selectors, Store};

use super::error::ValidationError;
use super::reject;

/// Pending edits to the signed-in user's profile.
///
/// `None` leaves a field as it is. For `phone` and `address` an empty
/// string clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Opaque image data, usually from [`crate::avatar::encode_avatar`].
    pub avatar: Option<String>,
}

impl ProfileDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.address.is_none() && self.avatar.is_none()
    }

    fn apply(self, mut user: User) -> User {
        if let Some(name) = self.name {
            user.name = name.trim().to_string();
        }
        if let Some(phone) = self.phone {
            user.phone = non_empty(phone);
        }
        if let Some(address) = self.address {
            user.address = non_empty(address);
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
        user
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Merge `draft` into the signed-in user.
///
/// Both the users list and the session receive the updated record, so the
/// two never disagree and both reach storage through the store.
pub fn save_profile(
    store: &Store,
    notifier: &dyn Notifier,
    draft: ProfileDraft,
) -> Result<User, ValidationError> {
    let Some(current) = store.with_state_ref(|state| selectors::current_user(state).cloned()) else {
        return reject(notifier, ValidationError::NotSignedIn);
    };
    if draft.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return reject(notifier, ValidationError::EmptyName);
    }

    let updated = draft.apply(current);
    store.dispatch(UsersIntent::Update(updated.clone()));
    store.dispatch(SessionIntent::SignIn(updated.clone()));
    tracing::info!(email = %updated.email, "profile saved");
    Ok(updated)
}
