//! Run configuration loaded from environment variables.
//!
//! The tenant id, account passwords and service-account key location are
//! deployment-specific secrets and are never compiled in; they are read
//! once at startup and validated before any network client is built.

use std::env;
use std::path::PathBuf;

/// Identity Platform rejects passwords shorter than this.
const MIN_PASSWORD_LEN: usize = 6;

/// Run configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Target tenant ---
    /// Tenant whose staff accounts are provisioned
    pub tenant_id: String,

    // --- GCP access ---
    /// GCP project id hosting Identity Platform and Firestore
    pub gcp_project_id: String,
    /// Service-account key file; ADC is used when unset
    pub credentials_file: Option<PathBuf>,

    // --- Accounts (secrets) ---
    /// Kitchen-display account email
    pub kitchen_email: String,
    /// Kitchen-display account password
    pub kitchen_password: String,
    /// Kitchen station the display account is bound to
    pub kitchen_station_id: String,
    /// Floor-captain account email
    pub captain_email: String,
    /// Floor-captain account password
    pub captain_password: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            tenant_id: "test-tenant".to_string(),
            gcp_project_id: "test-project".to_string(),
            credentials_file: None,
            kitchen_email: "kitchen@test-tenant.com".to_string(),
            kitchen_password: "test_kitchen_password".to_string(),
            kitchen_station_id: "hot_kitchen".to_string(),
            captain_email: "captain@test-tenant.com".to_string(),
            captain_password: "test_captain_password".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TENANT_ID`, `GCP_PROJECT_ID` and both passwords are required.
    /// Emails default to `kitchen@{tenant}.com` / `captain@{tenant}.com`,
    /// and the kitchen station defaults to `hot_kitchen`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let tenant_id = env::var("TENANT_ID").map_err(|_| ConfigError::Missing("TENANT_ID"))?;

        let config = Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            credentials_file: env::var("SERVICE_ACCOUNT_KEY").ok().map(PathBuf::from),

            kitchen_email: env::var("KITCHEN_EMAIL")
                .unwrap_or_else(|_| format!("kitchen@{}.com", tenant_id)),
            kitchen_password: env::var("KITCHEN_PASSWORD")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("KITCHEN_PASSWORD"))?,
            kitchen_station_id: env::var("KITCHEN_STATION_ID")
                .unwrap_or_else(|_| "hot_kitchen".to_string()),

            captain_email: env::var("CAPTAIN_EMAIL")
                .unwrap_or_else(|_| format!("captain@{}.com", tenant_id)),
            captain_password: env::var("CAPTAIN_PASSWORD")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CAPTAIN_PASSWORD"))?,

            tenant_id,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tenant_id.trim().is_empty() {
            return Err(ConfigError::Invalid("TENANT_ID", "must not be empty"));
        }
        for (name, password) in [
            ("KITCHEN_PASSWORD", &self.kitchen_password),
            ("CAPTAIN_PASSWORD", &self.captain_password),
        ] {
            if password.len() < MIN_PASSWORD_LEN {
                return Err(ConfigError::Invalid(
                    name,
                    "must be at least 6 characters",
                ));
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
