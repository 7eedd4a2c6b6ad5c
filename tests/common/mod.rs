// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use staff_provisioner::config::Config;
use staff_provisioner::db::FirestoreDb;
use staff_provisioner::models::Tenant;
use staff_provisioner::services::{IdentityClient, Provisioner};

pub const TEST_PROJECT: &str = "test-project";

/// Check if both emulators are available via environment variables.
#[allow(dead_code)]
pub fn emulators_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
        && std::env::var("FIREBASE_AUTH_EMULATOR_HOST").is_ok()
}

/// Skip test with message if the emulators are not available.
#[macro_export]
macro_rules! require_emulators {
    () => {
        if !crate::common::emulators_available() {
            eprintln!(
                "⚠️  Skipping: FIRESTORE_EMULATOR_HOST / FIREBASE_AUTH_EMULATOR_HOST not set"
            );
            return;
        }
    };
}

/// Generate a unique suffix for test isolation.
#[allow(dead_code)]
pub fn unique_suffix() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
}

/// Config pointed at the emulators, with a unique tenant and emails.
#[allow(dead_code)]
pub fn test_config(suffix: u64) -> Config {
    Config {
        tenant_id: format!("tenant-{}", suffix),
        gcp_project_id: TEST_PROJECT.to_string(),
        kitchen_email: format!("kitchen-{}@example.com", suffix),
        captain_email: format!("captain-{}@example.com", suffix),
        ..Config::default()
    }
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new(TEST_PROJECT, None)
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test identity client.
#[allow(dead_code)]
pub async fn test_identity() -> IdentityClient {
    IdentityClient::new(TEST_PROJECT, None)
        .await
        .expect("Failed to connect to Auth emulator")
}

/// Create a provisioner wired to both emulators.
#[allow(dead_code)]
pub async fn test_provisioner(tenant_id: &str) -> Provisioner {
    Provisioner::new(test_identity().await, test_db().await, tenant_id.to_string())
}

/// Seed a tenant document so the provisioning precondition holds.
///
/// Production code never writes tenants, so the fixture goes through a raw
/// emulator client.
#[allow(dead_code)]
pub async fn seed_tenant(tenant_id: &str) {
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

    let raw = firestore::FirestoreDb::with_options_token_source(
        firestore::FirestoreDbOptions::new(TEST_PROJECT.to_string()),
        gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
        gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
    )
    .await
    .expect("Failed to connect to Firestore emulator");

    let tenant = Tenant {
        name: Some("Test Restaurant".to_string()),
        is_active: Some(true),
    };

    let _: () = raw
        .fluent()
        .update()
        .in_col("tenants")
        .document_id(tenant_id)
        .object(&tenant)
        .execute()
        .await
        .expect("Failed to seed tenant");
}
