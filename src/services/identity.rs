// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity Toolkit admin client for account provisioning.
//!
//! Handles:
//! - Account creation with a pre-verified email
//! - Account lookup by email
//! - Error envelope classification (EMAIL_EXISTS and friends)

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

const IDENTITY_TOOLKIT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// An account as the identity service reports it.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    /// Provider-assigned account id (`localId` on the wire)
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

/// Admin client for the Identity Toolkit v1 REST API.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    /// None in emulator mode, where a static owner token is accepted
    token_generator: Option<Arc<gcloud_sdk::GoogleAuthTokenGenerator>>,
}

impl IdentityClient {
    /// Create a new identity client for the given project.
    ///
    /// Uses the Auth emulator when FIREBASE_AUTH_EMULATOR_HOST is set;
    /// otherwise authenticates with the service-account key file when one
    /// is given, falling back to Application Default Credentials.
    pub async fn new(project_id: &str, credentials_file: Option<&Path>) -> Result<Self, AppError> {
        if let Ok(host) = std::env::var("FIREBASE_AUTH_EMULATOR_HOST") {
            tracing::info!(host = %host, "Using unauthenticated connection for Auth Emulator");
            return Ok(Self {
                http: reqwest::Client::new(),
                base_url: format!("http://{}/identitytoolkit.googleapis.com/v1", host),
                project_id: project_id.to_string(),
                token_generator: None,
            });
        }

        let token_source = match credentials_file {
            Some(path) => gcloud_sdk::TokenSourceType::File(path.to_path_buf()),
            None => gcloud_sdk::TokenSourceType::Default,
        };

        let token_generator = gcloud_sdk::GoogleAuthTokenGenerator::new(
            token_source,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
        )
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to initialize credentials: {}", e))
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: IDENTITY_TOOLKIT_BASE_URL.to_string(),
            project_id: project_id.to_string(),
            token_generator: Some(Arc::new(token_generator)),
        })
    }

    /// Create an account with a pre-verified email address.
    ///
    /// Fails with an EMAIL_EXISTS identity error when the address is
    /// already registered.
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<IdentityRecord, AppError> {
        let url = format!("{}/projects/{}/accounts", self.base_url, self.project_id);

        let body = SignUpRequest {
            email,
            password,
            display_name,
            email_verified: true,
        };

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header().await?)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Identity(e.to_string()))?;

        let created: SignUpResponse = self.check_response_json(response).await?;

        Ok(IdentityRecord {
            uid: created.local_id,
            email: created.email.unwrap_or_else(|| email.to_string()),
            display_name: created.display_name.or_else(|| Some(display_name.to_string())),
            email_verified: true,
        })
    }

    /// Look up an existing account by email.
    ///
    /// Fails with a USER_NOT_FOUND identity error when no account matches.
    pub async fn lookup_by_email(&self, email: &str) -> Result<IdentityRecord, AppError> {
        let url = format!(
            "{}/projects/{}/accounts:lookup",
            self.base_url, self.project_id
        );

        let body = LookupRequest { email: [email] };

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header().await?)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Identity(e.to_string()))?;

        // The lookup endpoint reports a miss as a 200 with no users array.
        let found: LookupResponse = self.check_response_json(response).await?;

        let user = found
            .users
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Identity(AppError::USER_NOT_FOUND.to_string()))?;

        Ok(IdentityRecord {
            uid: user.local_id,
            email: user.email.unwrap_or_else(|| email.to_string()),
            display_name: user.display_name,
            email_verified: user.email_verified.unwrap_or(false),
        })
    }

    /// Authorization header value for the next request.
    async fn auth_header(&self) -> Result<String, AppError> {
        match &self.token_generator {
            Some(generator) => {
                let token = generator.create_token().await.map_err(|e| {
                    AppError::Identity(format!("Failed to obtain access token: {}", e))
                })?;
                Ok(token.header_value())
            }
            // The Auth emulator accepts a static owner token.
            None => Ok("Bearer owner".to_string()),
        }
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Identity(format!("JSON parse error: {}", e)))
    }
}

/// Map a non-success Identity Toolkit response to an identity error.
///
/// Known markers (EMAIL_EXISTS, USER_NOT_FOUND) are preserved verbatim so
/// callers can branch on them; everything else keeps the HTTP status for
/// diagnosis.
fn classify_error(status: reqwest::StatusCode, body: &str) -> AppError {
    match parse_error_marker(body) {
        Some(marker) if marker == AppError::EMAIL_EXISTS || marker == AppError::USER_NOT_FOUND => {
            AppError::Identity(marker)
        }
        Some(marker) => AppError::Identity(format!("HTTP {}: {}", status, marker)),
        None => AppError::Identity(format!("HTTP {}: {}", status, body)),
    }
}

/// Extract the leading error marker from a Google API error envelope.
///
/// Envelopes look like `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`;
/// the message is sometimes suffixed (`"EMAIL_EXISTS : detail"`), so only
/// the leading token is taken.
fn parse_error_marker(body: &str) -> Option<String> {
    let envelope: GoogleApiErrorEnvelope = serde_json::from_str(body).ok()?;
    let marker = envelope.error.message.split(':').next()?.trim();
    if marker.is_empty() {
        None
    } else {
        Some(marker.to_string())
    }
}

// ─── Wire Types ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
    email_verified: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    email: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    users: Option<Vec<ApiUserInfo>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUserInfo {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    email_verified: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct GoogleApiErrorEnvelope {
    error: GoogleApiError,
}

#[derive(Debug, Deserialize)]
struct GoogleApiError {
    message: String,
}
