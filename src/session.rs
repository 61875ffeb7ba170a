//! Stored connection to Microsoft 365
//!
//! The connection is an explicit context object passed into every command:
//! the access token, the tenant's resolved SharePoint root URL and the
//! Graph base URL. `login` persists it as JSON under the platform config
//! directory, `logout` removes it, and everything else restores it before
//! running. Token acquisition itself (device code flow, refresh) is the
//! concern of whatever produced the token; the stored value is opaque here.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CommandError, Result};

const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com";

/// Active connection to a Microsoft 365 tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Bearer token presented on every request
    pub access_token: String,
    /// Root SharePoint site URL of the tenant, when known
    pub spo_url: Option<String>,
    /// Microsoft Graph base URL
    #[serde(default = "default_graph_url")]
    pub graph_url: String,
}

fn default_graph_url() -> String {
    DEFAULT_GRAPH_URL.to_string()
}

impl Connection {
    pub fn new(access_token: String, spo_url: Option<String>) -> Self {
        Self {
            access_token,
            spo_url,
            graph_url: default_graph_url(),
        }
    }

    /// Restores the connection stored by `spoctl login`.
    pub fn restore() -> Result<Self> {
        Self::restore_from(&connection_file()?)
    }

    /// Restores a connection from an explicit path.
    pub fn restore_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|_| {
            CommandError::Configuration(
                "Not logged in to Microsoft 365. Run 'spoctl login' first.".to_string(),
            )
        })?;
        serde_json::from_str(&raw).map_err(|_| {
            CommandError::Configuration(
                "The stored connection is corrupted. Run 'spoctl login' again.".to_string(),
            )
        })
    }

    /// Persists the connection for subsequent invocations.
    pub fn store(&self) -> Result<()> {
        self.store_to(&connection_file()?)
    }

    /// Persists the connection to an explicit path.
    pub fn store_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CommandError::Configuration(format!("Failed to store the connection: {}", e))
            })?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(|e| {
            CommandError::Configuration(format!("Failed to store the connection: {}", e))
        })?;
        fs::write(path, raw).map_err(|e| {
            CommandError::Configuration(format!("Failed to store the connection: {}", e))
        })?;
        debug!("Connection stored at {}", path.display());
        Ok(())
    }

    /// Removes the stored connection. Returns whether one existed.
    pub fn clear() -> Result<bool> {
        let path = connection_file()?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CommandError::Configuration(format!(
                "Failed to remove the stored connection: {}",
                e
            ))),
        }
    }

    /// The tenant's SharePoint root URL, required for expanding
    /// server-relative options and for tenant-scoped SPO endpoints.
    pub fn require_spo_url(&self) -> Result<&str> {
        self.spo_url.as_deref().ok_or_else(|| {
            CommandError::Configuration(
                "No SharePoint root URL is set for the active connection. \
                 Run 'spoctl login --spo-url <url>' or use absolute URLs."
                    .to_string(),
            )
        })
    }
}

fn connection_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "spoctl", "spoctl").ok_or_else(|| {
        CommandError::Configuration(
            "Unable to determine the configuration directory for this platform.".to_string(),
        )
    })?;
    Ok(dirs.config_dir().join("connection.json"))
}
