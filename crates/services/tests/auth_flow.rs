use std::sync::Arc;

use offerboard_core::model::Credentials;
use offerboard_core::time::fixed_clock;
use services::{AuthError, AuthService};
use storage::repository::Storage;

fn preset_auth(storage: &Storage) -> AuthService {
    AuthService::new(
        fixed_clock(),
        Credentials::preset(),
        Arc::clone(&storage.sessions),
    )
}

#[tokio::test]
async fn login_persists_across_restart() {
    let storage = Storage::in_memory();
    let auth = preset_auth(&storage);

    auth.login("admin", "admin123").await.unwrap();
    assert!(auth.is_authenticated());

    // A fresh service over the same storage simulates an app restart.
    let restarted = preset_auth(&storage);
    assert!(!restarted.is_authenticated());
    let state = restarted.restore().await.unwrap();
    assert!(state.is_authenticated());
    assert!(restarted.is_authenticated());
}

#[tokio::test]
async fn rejected_login_leaves_state_and_flag_unchanged() {
    let storage = Storage::in_memory();
    let auth = preset_auth(&storage);

    let err = auth.login("admin", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::Credentials(_)));
    assert_eq!(err.to_string(), "invalid username or password");
    assert!(!auth.is_authenticated());

    let restarted = preset_auth(&storage);
    assert!(!restarted.restore().await.unwrap().is_authenticated());
}

#[tokio::test]
async fn wrong_field_is_not_disclosed() {
    let storage = Storage::in_memory();
    let auth = preset_auth(&storage);

    let bad_user = auth.login("root", "admin123").await.unwrap_err();
    let bad_pass = auth.login("admin", "hunter2").await.unwrap_err();
    assert_eq!(bad_user.to_string(), bad_pass.to_string());
}

#[tokio::test]
async fn logout_clears_the_persisted_flag() {
    let storage = Storage::in_memory();
    let auth = preset_auth(&storage);

    auth.login("admin", "admin123").await.unwrap();
    auth.logout().await.unwrap();
    assert!(!auth.is_authenticated());

    let restarted = preset_auth(&storage);
    assert!(!restarted.restore().await.unwrap().is_authenticated());
}

#[tokio::test]
async fn custom_credentials_replace_the_preset_pair() {
    let storage = Storage::in_memory();
    let auth = AuthService::new(
        fixed_clock(),
        Credentials::new("ops", "s3cret"),
        Arc::clone(&storage.sessions),
    );

    assert!(auth.login("admin", "admin123").await.is_err());
    auth.login("ops", "s3cret").await.unwrap();
    assert!(auth.is_authenticated());
}
