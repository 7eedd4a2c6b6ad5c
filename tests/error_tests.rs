// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error classification tests.

use staff_provisioner::error::AppError;

#[test]
fn test_is_email_exists_matches() {
    let err = AppError::Identity(AppError::EMAIL_EXISTS.to_string());
    assert!(err.is_email_exists());

    // Marker embedded in a longer message still matches
    let err = AppError::Identity("HTTP 400 Bad Request: EMAIL_EXISTS".to_string());
    assert!(err.is_email_exists());
}

#[test]
fn test_is_email_exists_no_match() {
    let err = AppError::Identity("INVALID_EMAIL".to_string());
    assert!(!err.is_email_exists());

    // Only identity errors are absorbed by the update path
    let err = AppError::Database(AppError::EMAIL_EXISTS.to_string());
    assert!(!err.is_email_exists());

    let err = AppError::TenantNotFound("ghar-jesa-khana".to_string());
    assert!(!err.is_email_exists());
}

#[test]
fn test_is_user_not_found() {
    let err = AppError::Identity(AppError::USER_NOT_FOUND.to_string());
    assert!(err.is_user_not_found());

    let err = AppError::Identity(AppError::EMAIL_EXISTS.to_string());
    assert!(!err.is_user_not_found());

    let err = AppError::Database(AppError::USER_NOT_FOUND.to_string());
    assert!(!err.is_user_not_found());
}

#[test]
fn test_tenant_not_found_display_names_the_tenant() {
    let err = AppError::TenantNotFound("ghar-jesa-khana".to_string());
    assert!(err.to_string().contains("ghar-jesa-khana"));
}
