// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Tenants (existence probe)
//! - User profiles (full and merge writes)
//! - Staff memberships (tenant sub-collection)
//!
//! Every timestamp field is assigned server-side through write transforms,
//! never from the local clock.

use std::path::Path;

use firestore::{path_camel_case, paths_camel_case, FirestoreTransformServerValue};

use crate::db::collections;
use crate::error::AppError;
use crate::models::{StaffMembership, Tenant, UserProfile};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: firestore::FirestoreDb,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// Uses the emulator when FIRESTORE_EMULATOR_HOST is set; otherwise
    /// authenticates with the service-account key file when one is given,
    /// falling back to Application Default Credentials.
    pub async fn new(project_id: &str, credentials_file: Option<&Path>) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = match credentials_file {
            Some(path) => {
                firestore::FirestoreDb::with_options_token_source(
                    firestore::FirestoreDbOptions::new(project_id.to_string()),
                    gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
                    gcloud_sdk::TokenSourceType::File(path.to_path_buf()),
                )
                .await
            }
            None => firestore::FirestoreDb::new(project_id).await,
        }
        .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self { client })
    }

    // ─── Tenant Operations ───────────────────────────────────────

    /// Get a tenant document, if it exists.
    pub async fn get_tenant(&self, tenant_id: &str) -> Result<Option<Tenant>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::TENANTS)
            .obj()
            .one(tenant_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── User Profile Operations ─────────────────────────────────

    /// Get a user profile by identity uid.
    pub async fn get_user_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write a full user profile document.
    ///
    /// The server assigns both `createdAt` and `updatedAt`.
    pub async fn set_user_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&profile.uid)
            .object(profile)
            .transforms(|t| {
                t.fields([
                    t.field(path_camel_case!(UserProfile::created_at))
                        .server_value(FirestoreTransformServerValue::RequestTime),
                    t.field(path_camel_case!(UserProfile::updated_at))
                        .server_value(FirestoreTransformServerValue::RequestTime),
                ])
            })
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Merge-update an existing user profile.
    ///
    /// Only the roster fields are written; `createdAt` is left untouched and
    /// the server refreshes `updatedAt`. The station field joins the mask
    /// only when the profile carries one, so a merge never deletes it.
    pub async fn merge_user_profile(&self, profile: &UserProfile) -> Result<(), AppError> {
        let mut merge_fields = paths_camel_case!(UserProfile::{
            email,
            display_name,
            role,
            tenant_id,
            is_active
        });
        if profile.kitchen_station_id.is_some() {
            merge_fields.push(path_camel_case!(UserProfile::kitchen_station_id));
        }

        let _: () = self
            .client
            .fluent()
            .update()
            .fields(merge_fields)
            .in_col(collections::USERS)
            .document_id(&profile.uid)
            .object(profile)
            .transforms(|t| {
                t.fields([t
                    .field(path_camel_case!(UserProfile::updated_at))
                    .server_value(FirestoreTransformServerValue::RequestTime)])
            })
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Staff Membership Operations ─────────────────────────────

    /// Get a staff membership from the tenant's staff sub-collection.
    pub async fn get_staff_membership(
        &self,
        tenant_id: &str,
        uid: &str,
    ) -> Result<Option<StaffMembership>, AppError> {
        let tenant_path = self
            .client
            .parent_path(collections::TENANTS, tenant_id)
            .map_err(|e| AppError::Database(e.to_string()))?;

        self.client
            .fluent()
            .select()
            .by_id_in(collections::STAFF)
            .parent(&tenant_path)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write a staff membership under the tenant's staff sub-collection.
    ///
    /// The server assigns `addedAt`.
    pub async fn set_staff_membership(
        &self,
        tenant_id: &str,
        membership: &StaffMembership,
    ) -> Result<(), AppError> {
        let tenant_path = self
            .client
            .parent_path(collections::TENANTS, tenant_id)
            .map_err(|e| AppError::Database(e.to_string()))?;

        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collections::STAFF)
            .document_id(&membership.uid)
            .parent(&tenant_path)
            .object(membership)
            .transforms(|t| {
                t.fields([t
                    .field(path_camel_case!(StaffMembership::added_at))
                    .server_value(FirestoreTransformServerValue::RequestTime)])
            })
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
