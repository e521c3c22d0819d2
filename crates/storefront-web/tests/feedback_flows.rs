// Flow-level behaviour of the storefront client, checked without a browser.
// cargo test -p storefront-web --test feedback_flows

use rstest::*;
use std::time::Duration;
use storefront_web::credentials::{
    CredentialVault, KeyValueStore, MemoryStore, PASSWORD_KEY, REMEMBER_KEY, USERNAME_KEY,
};
use storefront_web::error::ApiError;
use storefront_web::feedback::{
    Blocked, Feedback, FeedbackPolicy, Notice, SubmitState, ERROR_AUTO_HIDE,
};
use storefront_web::gallery::GalleryCursor;
use storefront_web::messages;
use storefront_web::models::LoginCredentials;

#[fixture]
fn credentials() -> LoginCredentials {
    LoginCredentials {
        username: "captain@example.com".to_string(),
        password: "s3cret".to_string(),
    }
}

#[fixture]
fn login_feedback() -> Feedback {
    Feedback::new(FeedbackPolicy::retryable().auto_hide(ERROR_AUTO_HIDE))
}

// === Gallery ===

#[rstest]
#[case(3, 0)]
#[case(3, 3)]
#[case(3, 7)]
#[case(5, 12)]
#[case(1, 4)]
fn gallery_wraps_forward(#[case] len: usize, #[case] clicks: usize) {
    let mut cursor = GalleryCursor::new(len);
    for _ in 0..clicks {
        cursor.forward();
    }

    let mut reduced = GalleryCursor::new(len);
    for _ in 0..clicks % len {
        reduced.forward();
    }

    assert_eq!(cursor.index(), reduced.index());
}

#[test]
fn three_thumbnails_three_clicks_back_to_start() {
    let mut cursor = GalleryCursor::new(3);
    assert_eq!(cursor.forward(), Some(1));
    assert_eq!(cursor.forward(), Some(2));
    assert_eq!(cursor.forward(), Some(0));
}

// === Remember me ===

#[rstest]
fn remembered_credentials_survive_reload(credentials: LoginCredentials) {
    let store = MemoryStore::new();
    CredentialVault::new(&store).record(true, &credentials);

    // A reload builds a new vault over the same storage.
    let reloaded = CredentialVault::new(&store);
    assert_eq!(reloaded.load(), Some(credentials));
    assert_eq!(store.get(REMEMBER_KEY).as_deref(), Some("true"));
}

#[rstest]
fn unchecking_remember_me_clears_storage(credentials: LoginCredentials) {
    let store = MemoryStore::new();
    let vault = CredentialVault::new(&store);
    vault.record(true, &credentials);

    vault.record(false, &credentials);

    assert_eq!(vault.load(), None);
    assert!(store.is_empty());
    assert_eq!(store.get(USERNAME_KEY), None);
    assert_eq!(store.get(PASSWORD_KEY), None);
}

#[rstest]
fn every_submit_overwrites_remembered_values(credentials: LoginCredentials) {
    let store = MemoryStore::new();
    let vault = CredentialVault::new(&store);
    vault.record(true, &credentials);

    let changed = LoginCredentials {
        username: "first-mate@example.com".to_string(),
        password: "other".to_string(),
    };
    vault.record(true, &changed);

    assert_eq!(vault.load(), Some(changed));
    assert_eq!(store.len(), 3);
}

// === Login messages ===

#[rstest]
#[case(ApiError::rejected(429, None), messages::LOGIN_RATE_LIMITED)]
#[case(
    ApiError::rejected(429, Some("LOGIN_BAD_CREDENTIALS".into())),
    messages::LOGIN_RATE_LIMITED
)]
#[case(
    ApiError::rejected(400, Some("LOGIN_BAD_CREDENTIALS".into())),
    messages::LOGIN_BAD_CREDENTIALS
)]
#[case(
    ApiError::rejected(400, Some("LOGIN_USER_NOT_VERIFIED".into())),
    messages::LOGIN_FAILED
)]
#[case(ApiError::rejected(500, None), messages::LOGIN_FAILED)]
#[case(ApiError::Network("failed to fetch".into()), messages::NETWORK_ERROR)]
fn login_failure_message(#[case] err: ApiError, #[case] expected: &str) {
    assert_eq!(messages::login_failure(&err), expected);
}

#[rstest]
fn login_error_auto_hides_after_five_seconds(mut login_feedback: Feedback) {
    let attempt = login_feedback.begin().unwrap();
    let delay = login_feedback.fail(messages::login_failure(&ApiError::rejected(429, None)));
    assert_eq!(delay, Some(Duration::from_secs(5)));
    assert_eq!(
        login_feedback.notice(),
        Some(&Notice::error(messages::LOGIN_RATE_LIMITED))
    );

    login_feedback.dismiss(attempt);
    assert_eq!(login_feedback.notice(), None);
    assert!(login_feedback.trigger_enabled());
}

// === One-shot flows ===

#[test]
fn verification_request_cannot_be_triggered_twice() {
    let mut feedback = Feedback::new(FeedbackPolicy::one_shot());
    feedback.begin().unwrap();
    feedback.succeed(Some(Notice::success(messages::VERIFICATION_SENT)));

    assert!(!feedback.trigger_enabled());
    assert_eq!(feedback.begin(), Err(Blocked::Completed));
    assert_eq!(feedback.state(), SubmitState::Succeeded);
    assert_eq!(
        feedback.notice(),
        Some(&Notice::success(messages::VERIFICATION_SENT))
    );
}

#[test]
fn one_shot_flow_can_retry_after_failure() {
    let mut feedback = Feedback::new(FeedbackPolicy::one_shot());
    feedback.begin().unwrap();
    feedback.fail(messages::RESET_REQUEST_FAILED);

    assert!(feedback.trigger_enabled());
    assert_eq!(feedback.begin(), Ok(2));
}

// === Transport failures ===

#[rstest]
#[case(FeedbackPolicy::retryable())]
#[case(FeedbackPolicy::one_shot())]
#[case(FeedbackPolicy::retryable().auto_hide(ERROR_AUTO_HIDE))]
fn network_failure_never_leaves_loading_visible(#[case] policy: FeedbackPolicy) {
    let err = ApiError::Network("failed to fetch".into());

    let mut shown = Feedback::new(policy);
    shown.begin().unwrap();
    assert!(shown.is_loading());
    shown.fail(messages::NETWORK_ERROR);
    assert!(!shown.is_loading());
    assert!(shown.notice().is_some_and(Notice::is_error));

    // Flows that report through an alert release the latch instead.
    let mut alerted = Feedback::new(policy);
    alerted.begin().unwrap();
    assert_eq!(messages::detail_or(&err, messages::RESET_FAILED), messages::GENERIC_RETRY);
    alerted.release();
    assert!(!alerted.is_loading());
    assert!(alerted.trigger_enabled());
}

#[test]
fn double_click_issues_one_request() {
    let mut feedback = Feedback::default();
    let mut requests = 0;
    for _ in 0..2 {
        if feedback.begin().is_ok() {
            requests += 1;
        }
    }
    assert_eq!(requests, 1);
}

// === Order modal ===

#[test]
fn closing_order_modal_drops_late_pickup_points() {
    let mut pickup = Feedback::default();
    let first = pickup.begin().unwrap();
    assert!(!pickup.trigger_enabled());

    // Closed while loading, then Buy again.
    pickup.release();
    let second = pickup.begin().unwrap();

    assert!(!pickup.is_current(first));
    assert!(pickup.is_current(second));
    pickup.succeed(None);
    assert!(!pickup.is_current(second));
    assert!(pickup.trigger_enabled());
}

#[test]
fn pickup_points_after_close_are_ignored() {
    let mut pickup = Feedback::default();
    let attempt = pickup.begin().unwrap();
    pickup.release();

    assert!(!pickup.is_current(attempt));
    assert_eq!(pickup.state(), SubmitState::Idle);
}

// === Favorites ===

#[test]
fn already_favorited_product_is_reported_without_success() {
    let mut feedback = Feedback::default();
    feedback.begin().unwrap();

    let err = ApiError::rejected(400, Some("Product already in favorites".into()));
    assert_eq!(
        messages::favorite_add_failure(&err),
        messages::FAVORITE_ALREADY_ADDED
    );
    feedback.release();

    // The heart only pulses on success.
    assert_ne!(feedback.state(), SubmitState::Succeeded);
    assert!(feedback.trigger_enabled());
}

#[test]
fn favorite_add_transport_failure_is_not_a_duplicate() {
    let err = ApiError::Network("failed to fetch".into());
    assert_eq!(messages::favorite_add_failure(&err), messages::FAVORITE_ADD_FAILED);
}
