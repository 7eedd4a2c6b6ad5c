// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tenant document probe type.

use serde::{Deserialize, Serialize};

/// Tenant document at `tenants/{tenantId}`.
///
/// The platform owns these documents; provisioning only checks that one
/// exists, so every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
