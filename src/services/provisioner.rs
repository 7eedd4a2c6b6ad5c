// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Staff provisioning workflow.
//!
//! Per account:
//! 1. Create the identity account (email pre-verified)
//! 2. Write the Firestore user profile
//! 3. Record the staff membership under the tenant
//! 4. On an already-registered email, refresh the profile instead
//!
//! The tenant document must exist before the first write; a missing tenant
//! aborts the whole run with no side effects.

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{StaffMembership, UserProfile, UserSpec};
use crate::services::identity::{IdentityClient, IdentityRecord};

/// Outcome of provisioning a single account. Both variants are success
/// cases and carry the identity record the account resolved to.
#[derive(Debug, Clone)]
pub enum ProvisionOutcome {
    /// A fresh identity was created and all documents written.
    Created(IdentityRecord),
    /// The email was already registered; the profile was merge-updated.
    ProfileRefreshed(IdentityRecord),
}

impl ProvisionOutcome {
    /// The identity record the account resolved to.
    pub fn identity(&self) -> &IdentityRecord {
        match self {
            ProvisionOutcome::Created(record) => record,
            ProvisionOutcome::ProfileRefreshed(record) => record,
        }
    }
}

/// Provisions the staff roster for one tenant.
pub struct Provisioner {
    identity: IdentityClient,
    db: FirestoreDb,
    tenant_id: String,
}

impl Provisioner {
    /// Create a provisioner bound to one tenant.
    pub fn new(identity: IdentityClient, db: FirestoreDb, tenant_id: String) -> Self {
        Self {
            identity,
            db,
            tenant_id,
        }
    }

    /// Provision every spec, in order.
    ///
    /// The tenant existence check runs before any write. Specs are
    /// processed strictly sequentially; any error other than an
    /// already-registered email aborts the remaining specs.
    pub async fn provision_all(&self, specs: &[UserSpec]) -> Result<Vec<ProvisionOutcome>> {
        if self.db.get_tenant(&self.tenant_id).await?.is_none() {
            tracing::error!(tenant = %self.tenant_id, "Tenant not found, aborting before any writes");
            return Err(AppError::TenantNotFound(self.tenant_id.clone()));
        }
        tracing::info!(tenant = %self.tenant_id, "Tenant verified");

        let mut outcomes = Vec::with_capacity(specs.len());
        for spec in specs {
            outcomes.push(self.create_or_update_user(spec).await?);
        }
        Ok(outcomes)
    }

    /// Create the account for one spec, or refresh its profile when the
    /// email is already registered.
    pub async fn create_or_update_user(&self, spec: &UserSpec) -> Result<ProvisionOutcome> {
        tracing::info!(email = %spec.email, role = spec.role.as_str(), "Provisioning user");

        match self
            .identity
            .create_account(&spec.email, &spec.password, &spec.display_name)
            .await
        {
            Ok(record) => {
                tracing::info!(uid = %record.uid, "Identity account created");

                let profile = UserProfile::from_spec(spec, &record.uid, &self.tenant_id);
                self.db.set_user_profile(&profile).await?;
                tracing::info!(uid = %record.uid, "User profile created");

                let membership = StaffMembership::from_spec(spec, &record.uid);
                self.db
                    .set_staff_membership(&self.tenant_id, &membership)
                    .await?;
                tracing::info!(uid = %record.uid, tenant = %self.tenant_id, "Added to tenant staff");

                Ok(ProvisionOutcome::Created(record))
            }
            Err(e) if e.is_email_exists() => {
                tracing::warn!(email = %spec.email, "User already exists, refreshing profile");

                let record = self.identity.lookup_by_email(&spec.email).await?;

                let profile = UserProfile::from_spec(spec, &record.uid, &self.tenant_id);
                self.db.merge_user_profile(&profile).await?;
                tracing::info!(uid = %record.uid, "User profile refreshed");

                self.ensure_staff_membership(spec, &record.uid).await?;

                Ok(ProvisionOutcome::ProfileRefreshed(record))
            }
            Err(e) => {
                tracing::error!(email = %spec.email, error = %e, "Failed to provision user");
                Err(e)
            }
        }
    }

    /// Write the staff membership only if it is missing.
    ///
    /// An intact membership is never rewritten, so `addedAt` survives
    /// re-runs; a membership lost to a past partial failure is restored.
    async fn ensure_staff_membership(&self, spec: &UserSpec, uid: &str) -> Result<()> {
        if self
            .db
            .get_staff_membership(&self.tenant_id, uid)
            .await?
            .is_some()
        {
            tracing::debug!(uid = %uid, "Staff membership already present");
            return Ok(());
        }

        let membership = StaffMembership::from_spec(spec, uid);
        self.db
            .set_staff_membership(&self.tenant_id, &membership)
            .await?;
        tracing::info!(uid = %uid, tenant = %self.tenant_id, "Restored missing staff membership");
        Ok(())
    }
}

/// Render the end-of-run credential sheet for manual handoff.
///
/// This is the only place plaintext passwords appear; the sheet goes to
/// stdout once and is never logged.
pub fn credential_sheet(specs: &[UserSpec]) -> String {
    let rule = "─".repeat(60);
    let mut sheet = String::new();

    sheet.push_str(&format!("{}\nLogin credentials\n{}\n", rule, rule));
    for spec in specs {
        sheet.push_str(&format!("\n{}:\n", spec.description));
        sheet.push_str(&format!("  Email:    {}\n", spec.email));
        sheet.push_str(&format!("  Password: {}\n", spec.password));
        sheet.push_str(&format!("  Role:     {}\n", spec.role.as_str()));
        if let Some(station) = &spec.kitchen_station_id {
            sheet.push_str(&format!("  Station:  {}\n", station));
        }
    }
    sheet.push_str(&format!(
        "\n{}\nSave these credentials securely. Passwords can be changed after first login.\n",
        rule
    ));
    sheet
}
