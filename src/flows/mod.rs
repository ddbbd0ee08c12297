//! User-facing operations.
//!
//! Each flow validates its input against the current tree, reports a
//! failure through the [`Notifier`](crate::notify::Notifier) and leaves the
//! store untouched, or dispatches the transitions that carry it out.

mod account;
mod error;
mod leave;
mod profile;

pub use account::{login, logout, signup};
pub use error::ValidationError;
pub use leave::{approve_request, reject_request, reset_data, set_request_status, submit_leave, LeaveForm};
pub use profile::{save_profile, ProfileDraft};

use crate::notify::{Alert, Notifier};

fn reject<T>(notifier: &dyn Notifier, error: ValidationError) -> Result<T, ValidationError> {
    tracing::debug!(%error, "validation failed");
    notifier.notify(Alert::error(error.to_string()));
    Err(error)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
