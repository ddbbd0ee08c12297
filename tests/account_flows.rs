mod common;

use common::memory_storage;
use leavedesk::config::Config;
use leavedesk::features::recent_requests::RequestStatus;
use leavedesk::flows::{self, LeaveForm, ProfileDraft, ValidationError};
use leavedesk::notify::ChannelNotifier;
use leavedesk::store::selectors;
use leavedesk::{App, Store};

#[test]
fn duplicate_signup_is_rejected() {
    let store = Store::new();
    let (notifier, mut alerts) = ChannelNotifier::new();

    flows::signup(&store, &notifier, "Ann", "a@x.com", "pw").unwrap();
    assert_eq!(alerts.try_recv().unwrap().title, "Success");

    let err = flows::signup(&store, &notifier, "Other Ann", "a@x.com", "pw2").unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateEmail {
            email: "a@x.com".to_string()
        }
    );
    let alert = alerts.try_recv().unwrap();
    assert!(alert.is_error());
    assert_eq!(alert.message, "Email already exists. Please use a different email.");

    let state = store.get_state();
    assert_eq!(selectors::users_list(&state).len(), 1);
    assert_eq!(selectors::users_list(&state)[0].name, "Ann");
}

#[test]
fn login_with_unknown_credentials_leaves_session_alone() {
    let store = Store::new();
    let (notifier, mut alerts) = ChannelNotifier::new();

    let err = flows::login(&store, &notifier, "ghost@x.com", "nope").unwrap_err();
    assert_eq!(err, ValidationError::InvalidCredentials);
    assert!(selectors::current_user(&store.get_state()).is_none());

    let alert = alerts.try_recv().unwrap();
    assert_eq!(alert.message, "Invalid credentials");
    assert!(alerts.try_recv().is_err());
}

#[test]
fn signup_signs_in() {
    let store = Store::new();
    let (notifier, _alerts) = ChannelNotifier::new();
    flows::signup(&store, &notifier, "Ann", "a@x.com", "pw").unwrap();
    assert_eq!(
        selectors::current_user(&store.get_state()).map(|u| u.email.as_str()),
        Some("a@x.com")
    );
}

#[test]
fn profile_save_updates_list_and_session() {
    let store = Store::new();
    let (notifier, _alerts) = ChannelNotifier::new();
    flows::signup(&store, &notifier, "Ann", "a@x.com", "pw").unwrap();
    flows::signup(&store, &notifier, "Bob", "b@x.com", "pw").unwrap();

    let draft = ProfileDraft {
        name: Some("Bobby".to_string()),
        phone: Some("555-0101".to_string()),
        avatar: Some("data:image/jpeg;base64,AAAA".to_string()),
        ..Default::default()
    };
    let saved = flows::save_profile(&store, &notifier, draft).unwrap();

    let state = store.get_state();
    assert_eq!(selectors::current_user(&state), Some(&saved));
    assert_eq!(selectors::find_user_by_email(&state, "b@x.com"), Some(&saved));
    assert_eq!(selectors::find_user_by_email(&state, "a@x.com").unwrap().name, "Ann");
}

#[test]
fn profile_requires_sign_in() {
    let store = Store::new();
    let (notifier, mut alerts) = ChannelNotifier::new();
    let err = flows::save_profile(&store, &notifier, ProfileDraft::default()).unwrap_err();
    assert_eq!(err, ValidationError::NotSignedIn);
    assert!(alerts.try_recv().unwrap().is_error());
}

#[test]
fn approve_then_reset() {
    let store = Store::new();
    let (notifier, _alerts) = ChannelNotifier::new();
    let request = flows::submit_leave(
        &store,
        &notifier,
        LeaveForm {
            id: None,
            date: chrono::NaiveDate::from_ymd_opt(2025, 8, 4),
            leave_type: "Annual".to_string(),
        },
    )
    .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);

    let approved = flows::approve_request(&store, &notifier, request.id).unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(selectors::request_tally(&store.get_state()).approved, 1);

    flows::reset_data(&store);
    let state = store.get_state();
    assert!(selectors::recent_requests(&state).is_empty());
    assert_eq!(
        *selectors::leave_summary(&state),
        leavedesk::features::leave_summary::LeaveSummary::DEFAULT
    );
}

#[tokio::test]
async fn signed_in_user_survives_restart() {
    let (storage, backend) = memory_storage();
    let config = Config::default();

    let app = App::with_storage(storage.clone(), &config).await;
    let (notifier, _alerts) = ChannelNotifier::new();
    flows::signup(app.store(), &notifier, "Ann", "a@x.com", "pw").unwrap();
    app.close().await;
    assert!(backend.raw("root").is_some());

    let app = App::with_storage(storage, &config).await;
    let state = app.store().get_state();
    assert!(selectors::is_authenticated(&state));
    assert_eq!(selectors::users_list(&state).len(), 1);
    app.close().await;
}
