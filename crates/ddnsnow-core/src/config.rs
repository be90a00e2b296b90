//! Configuration types for the DDNS Now client
//!
//! This module defines the account and transport settings shared by the
//! provider crate and the command-line front end.

use serde::{Deserialize, Serialize};

use crate::form::{ControlFields, DEFAULT_UKEY};

/// Main provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Account domain (the DDNS Now user name)
    pub username: String,

    /// Password hash stored in the panel's login cookie
    /// ⚠️ NEVER log this value
    pub password_hash: String,

    /// Token for the update API (optional, only `update_via_api` needs it)
    /// ⚠️ NEVER log this value
    #[serde(default)]
    pub api_token: Option<String>,

    /// Base URL of the service
    #[serde(default = "default_server")]
    pub server: String,

    /// Account token submitted with every panel update
    #[serde(default = "default_ukey")]
    pub ukey: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fetch pages but never submit changes
    #[serde(default)]
    pub dry_run: bool,
}

impl ProviderConfig {
    /// Create a configuration with defaults for everything but the credentials
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            api_token: None,
            server: default_server(),
            ukey: default_ukey(),
            timeout_secs: default_timeout_secs(),
            dry_run: false,
        }
    }

    /// Point the client at another server (e.g. a test double)
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Set the update API token
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.username.is_empty() {
            return Err(crate::Error::config("DDNS Now username cannot be empty"));
        }
        if self.password_hash.is_empty() {
            return Err(crate::Error::config("DDNS Now password hash cannot be empty"));
        }
        if self.api_token.as_deref() == Some("") {
            return Err(crate::Error::config("DDNS Now API token cannot be empty when set"));
        }
        if !self.server.starts_with("https://") && !self.server.starts_with("http://") {
            return Err(crate::Error::config(format!(
                "Server must use HTTP or HTTPS scheme. Got: {}",
                self.server
            )));
        }
        if self.ukey.is_empty() {
            return Err(crate::Error::config("ukey cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(crate::Error::config("HTTP timeout must be > 0"));
        }
        Ok(())
    }

    /// Control panel page (GET) and form target (POST)
    pub fn control_url(&self) -> String {
        format!("{}/control.php", self.server.trim_end_matches('/'))
    }

    /// Update API endpoint
    pub fn update_url(&self) -> String {
        format!("{}/update.php", self.server.trim_end_matches('/'))
    }

    /// Pre-formatted session cookie for the control panel
    pub fn login_cookie(&self) -> String {
        format!(
            "cookie_loginuser=domain%3D{}%3Bpassword_hash%3D{}%3B",
            self.username, self.password_hash
        )
    }

    /// Static fields appended to every panel submission
    pub fn control_fields(&self) -> ControlFields {
        ControlFields::new(self.ukey.clone())
    }
}

// Custom Debug implementation that hides the credentials
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("username", &self.username)
            .field("password_hash", &"<REDACTED>")
            .field("api_token", &self.api_token.as_ref().map(|_| "<REDACTED>"))
            .field("server", &self.server)
            .field("timeout_secs", &self.timeout_secs)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

fn default_server() -> String {
    "https://f5.si".to_string()
}

fn default_ukey() -> String {
    DEFAULT_UKEY.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
