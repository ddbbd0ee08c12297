//! Signup, login and logout.

use crate::features::session::SessionIntent;
use crate::features::users::{User, UsersIntent};
use crate::notify::{Alert, Notifier};
use crate::store::{selectors, Store};

use super::error::ValidationError;
use super::{is_blank, reject};

/// Register a new account and sign it in.
///
/// Rejects blank fields and an email that is already registered. On
/// success a confirmation alert is sent.
pub fn signup(
    store: &Store,
    notifier: &dyn Notifier,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ValidationError> {
    if is_blank(name) || is_blank(email) || password.is_empty() {
        return reject(notifier, ValidationError::MissingFields);
    }
    let email = email.trim();
    if store.with_state_ref(|state| state.users.contains_email(email)) {
        return reject(
            notifier,
            ValidationError::DuplicateEmail {
                email: email.to_string(),
            },
        );
    }

    let user = User::new(name.trim(), email, password);
    store.dispatch(UsersIntent::Add(user.clone()));
    store.dispatch(SessionIntent::SignIn(user.clone()));
    tracing::info!(email = %user.email, "account created");
    notifier.notify(Alert::success("Signup successful!"));
    Ok(user)
}

/// Sign in the user whose email and password both match exactly.
pub fn login(
    store: &Store,
    notifier: &dyn Notifier,
    email: &str,
    password: &str,
) -> Result<User, ValidationError> {
    if is_blank(email) || password.is_empty() {
        return reject(notifier, ValidationError::MissingFields);
    }
    let email = email.trim();
    let found = store.with_state_ref(|state| {
        selectors::users_list(state)
            .iter()
            .find(|u| u.matches_credentials(email, password))
            .cloned()
    });
    let Some(user) = found else {
        return reject(notifier, ValidationError::InvalidCredentials);
    };

    store.dispatch(SessionIntent::SignIn(user.clone()));
    tracing::info!(email = %user.email, "signed in");
    Ok(user)
}

/// Clear the session. Returns whether someone was signed in.
pub fn logout(store: &Store) -> bool {
    let was_signed_in = store.with_state_ref(selectors::is_authenticated);
    store.dispatch(SessionIntent::SignOut);
    was_signed_in
}
