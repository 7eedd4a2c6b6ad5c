// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Staff provisioning entry point
//!
//! Creates (or refreshes) the kitchen-display and floor-captain accounts
//! for the configured tenant, then prints their credentials once for
//! manual handoff.

use staff_provisioner::{
    config::Config,
    db::FirestoreDb,
    error::AppError,
    models::UserSpec,
    services::{credential_sheet, IdentityClient, ProvisionOutcome, Provisioner},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "Provisioning failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        tenant = %config.tenant_id,
        project = %config.gcp_project_id,
        "Starting staff provisioning"
    );

    // Initialize Firestore and the identity client
    let db = FirestoreDb::new(&config.gcp_project_id, config.credentials_file.as_deref()).await?;
    let identity =
        IdentityClient::new(&config.gcp_project_id, config.credentials_file.as_deref()).await?;

    let provisioner = Provisioner::new(identity, db, config.tenant_id.clone());
    let specs = UserSpec::roster(&config);

    let outcomes = provisioner.provision_all(&specs).await?;

    for (spec, outcome) in specs.iter().zip(&outcomes) {
        match outcome {
            ProvisionOutcome::Created(record) => {
                tracing::info!(email = %spec.email, uid = %record.uid, "Account created")
            }
            ProvisionOutcome::ProfileRefreshed(record) => {
                tracing::info!(email = %spec.email, uid = %record.uid, "Existing account refreshed")
            }
        }
    }

    // One-time plaintext handoff. Deliberately stdout, never the log.
    print!("{}", credential_sheet(&specs));

    Ok(())
}

/// Initialize human-readable logging with env-filter overrides.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("staff_provisioner=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
