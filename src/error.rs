// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types for the provisioning run.

use crate::config::ConfigError;

/// Application error type covering startup and the provisioning flow.
///
/// Every variant is fatal for the run except `Identity` errors carrying the
/// `EMAIL_EXISTS` marker, which the provisioner absorbs into a profile
/// refresh.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tenant '{0}' not found")]
    TenantNotFound(String),

    #[error("Identity service error: {0}")]
    Identity(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Server marker for a create rejected because the email is taken.
    pub const EMAIL_EXISTS: &'static str = "EMAIL_EXISTS";

    /// Server marker for a lookup that matched no account.
    pub const USER_NOT_FOUND: &'static str = "USER_NOT_FOUND";

    /// True when the identity service rejected an account create because
    /// the email address is already registered.
    pub fn is_email_exists(&self) -> bool {
        matches!(self, AppError::Identity(msg) if msg.contains(Self::EMAIL_EXISTS))
    }

    /// True when an identity lookup came back empty.
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, AppError::Identity(msg) if msg.contains(Self::USER_NOT_FOUND))
    }
}

/// Result type alias for the provisioning flow.
pub type Result<T> = std::result::Result<T, AppError>;
