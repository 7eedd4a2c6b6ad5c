// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Staff account models: the provisioning roster and the stored profile.

use firestore::FirestoreTimestamp;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Staff role within a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Kitchen display operator, bound to one station
    Kitchen,
    /// Floor captain for serving and table management
    Captain,
}

impl StaffRole {
    /// Wire name of the role, as stored in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Kitchen => "kitchen",
            StaffRole::Captain => "captain",
        }
    }
}

/// One staff account to provision. The roster is fixed; credentials and
/// the station assignment come from configuration.
#[derive(Debug, Clone)]
pub struct UserSpec {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: StaffRole,
    /// Set only for kitchen-display accounts
    pub kitchen_station_id: Option<String>,
    /// Human-readable label for logs and the credential sheet
    pub description: String,
}

impl UserSpec {
    /// The two-account roster: one kitchen display user, one floor captain.
    pub fn roster(config: &Config) -> Vec<UserSpec> {
        vec![
            UserSpec {
                email: config.kitchen_email.clone(),
                password: config.kitchen_password.clone(),
                display_name: "Kitchen Staff".to_string(),
                role: StaffRole::Kitchen,
                kitchen_station_id: Some(config.kitchen_station_id.clone()),
                description: "Kitchen Display System User".to_string(),
            },
            UserSpec {
                email: config.captain_email.clone(),
                password: config.captain_password.clone(),
                display_name: "Floor Captain".to_string(),
                role: StaffRole::Captain,
                kitchen_station_id: None,
                description: "Floor Captain for serving and table management".to_string(),
            },
        ]
    }
}

/// User profile document stored at `users/{uid}`.
///
/// Field names are camelCase on the wire to match the documents the rest
/// of the platform reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Identity uid, also the document id
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub role: StaffRole,
    /// Owning tenant
    pub tenant_id: String,
    pub is_active: bool,
    /// Set only for kitchen-display accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchen_station_id: Option<String>,
    /// Server-assigned when the document is first written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<FirestoreTimestamp>,
    /// Server-assigned on every write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<FirestoreTimestamp>,
}

impl UserProfile {
    /// Build the profile document for a spec resolved to an identity uid.
    /// Timestamps are left unset; the server assigns them at write time.
    pub fn from_spec(spec: &UserSpec, uid: &str, tenant_id: &str) -> Self {
        Self {
            uid: uid.to_string(),
            email: spec.email.clone(),
            display_name: spec.display_name.clone(),
            role: spec.role,
            tenant_id: tenant_id.to_string(),
            is_active: true,
            kitchen_station_id: spec.kitchen_station_id.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_station_assignment() {
        let config = Config::default();
        let roster = UserSpec::roster(&config);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].role, StaffRole::Kitchen);
        assert_eq!(roster[0].kitchen_station_id.as_deref(), Some("hot_kitchen"));
        assert_eq!(roster[1].role, StaffRole::Captain);
        assert!(roster[1].kitchen_station_id.is_none());
    }

    #[test]
    fn test_roster_uses_configured_credentials() {
        let config = Config {
            kitchen_email: "kds@resto.example".to_string(),
            kitchen_password: "kds-secret".to_string(),
            kitchen_station_id: "tandoor".to_string(),
            ..Config::default()
        };
        let roster = UserSpec::roster(&config);

        assert_eq!(roster[0].email, "kds@resto.example");
        assert_eq!(roster[0].password, "kds-secret");
        assert_eq!(roster[0].kitchen_station_id.as_deref(), Some("tandoor"));
    }

    #[test]
    fn test_profile_wire_format() {
        let config = Config::default();
        let roster = UserSpec::roster(&config);
        let profile = UserProfile::from_spec(&roster[0], "uid-1", &config.tenant_id);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["uid"], "uid-1");
        assert_eq!(json["displayName"], "Kitchen Staff");
        assert_eq!(json["role"], "kitchen");
        assert_eq!(json["tenantId"], "test-tenant");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["kitchenStationId"], "hot_kitchen");
        // Server-assigned fields are omitted, never written as null
        assert!(json.get("createdAt").is_none());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_captain_profile_has_no_station_field() {
        let config = Config::default();
        let roster = UserSpec::roster(&config);
        let profile = UserProfile::from_spec(&roster[1], "uid-2", &config.tenant_id);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["role"], "captain");
        assert!(json.get("kitchenStationId").is_none());
    }
}
