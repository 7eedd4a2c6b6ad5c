//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    /// Tenant documents; staff memberships live in a sub-collection
    pub const TENANTS: &str = "tenants";
    /// User profile documents keyed by identity uid
    pub const USERS: &str = "users";
    /// Staff sub-collection under each tenant
    pub const STAFF: &str = "staff";
}
