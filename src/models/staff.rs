// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tenant staff membership model.

use firestore::FirestoreTimestamp;
use serde::{Deserialize, Serialize};

use crate::models::user::{StaffRole, UserSpec};

/// Staff membership document stored at `tenants/{tenantId}/staff/{uid}`.
///
/// A denormalized copy of the profile kept under the tenant so staff
/// listings never need a cross-collection query. Written once per account
/// and left untouched on re-runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMembership {
    /// Identity uid, also the document id
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: StaffRole,
    pub is_active: bool,
    /// Server-assigned when the membership is first written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<FirestoreTimestamp>,
}

impl StaffMembership {
    /// Build the membership document for a spec resolved to an identity uid.
    pub fn from_spec(spec: &UserSpec, uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            email: spec.email.clone(),
            display_name: spec.display_name.clone(),
            role: spec.role,
            is_active: true,
            added_at: None,
        }
    }
}
