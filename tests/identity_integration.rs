// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity client integration tests.
//!
//! These tests require the Firebase Auth emulator to be running; set
//! FIREBASE_AUTH_EMULATOR_HOST (and FIRESTORE_EMULATOR_HOST for the rest
//! of the suite). Each test isolates itself with unique email addresses.

mod common;
use common::{test_identity, unique_suffix};

#[tokio::test]
async fn test_create_then_lookup_round_trip() {
    require_emulators!();

    let suffix = unique_suffix();
    let identity = test_identity().await;
    let email = format!("roundtrip-{}@example.com", suffix);

    let created = identity
        .create_account(&email, "Secret@2026", "Round Trip")
        .await
        .unwrap();
    assert!(!created.uid.is_empty(), "uid should be assigned");
    assert_eq!(created.email, email);
    assert!(created.email_verified);

    let fetched = identity.lookup_by_email(&email).await.unwrap();
    assert_eq!(fetched.uid, created.uid);
    assert_eq!(fetched.display_name.as_deref(), Some("Round Trip"));
    assert!(fetched.email_verified, "accounts are provisioned pre-verified");

    println!("✓ Identity round trip verified: suffix={}", suffix);
}

#[tokio::test]
async fn test_duplicate_create_reports_email_exists() {
    require_emulators!();

    let suffix = unique_suffix();
    let identity = test_identity().await;
    let email = format!("duplicate-{}@example.com", suffix);

    identity
        .create_account(&email, "Secret@2026", "First")
        .await
        .unwrap();

    let err = identity
        .create_account(&email, "Other@2026", "Second")
        .await
        .unwrap_err();
    assert!(err.is_email_exists(), "got: {}", err);

    println!("✓ Duplicate email classified: suffix={}", suffix);
}

#[tokio::test]
async fn test_lookup_unknown_email_is_user_not_found() {
    require_emulators!();

    let identity = test_identity().await;
    let email = format!("ghost-{}@example.com", unique_suffix());

    let err = identity.lookup_by_email(&email).await.unwrap_err();
    assert!(err.is_user_not_found(), "got: {}", err);

    println!("✓ Unknown email classified as user-not-found");
}
