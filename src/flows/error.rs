use thiserror::Error;

/// Input rejected before any state change.
///
/// The `Display` text is what the user sees in the error alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Email already exists. Please use a different email.")]
    DuplicateEmail { email: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("You need to log in first")]
    NotSignedIn,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Date is required")]
    MissingDate,

    #[error("Type is required")]
    MissingLeaveType,

    #[error("Leave request {id} not found")]
    RequestNotFound { id: u64 },
}
