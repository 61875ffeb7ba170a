//! Connection management: `login`, `logout`, `status`
//!
//! These commands manage the stored connection file and never touch the
//! network; token acquisition happens outside this tool.

use clap::Args;
use serde_json::{json, Value};
use tracing::info;

use crate::error::Result;
use crate::session::Connection;
use crate::validation;

#[derive(Args)]
pub struct LoginOptions {
    /// Access token to present on subsequent requests
    #[arg(long)]
    pub access_token: String,

    /// Root SharePoint site URL of the tenant, e.g. https://contoso.sharepoint.com
    /// Required later for server-relative URL options and tenant-scoped commands
    #[arg(long)]
    pub spo_url: Option<String>,
}

pub fn login(options: LoginOptions) -> Result<Option<Value>> {
    if let Some(spo_url) = &options.spo_url {
        validation::validate_sharepoint_url("spo-url", spo_url)?;
        if spo_url.starts_with('/') {
            // login is where the root URL gets established, so a
            // server-relative value has nothing to resolve against
            return Err(crate::error::CommandError::Validation(
                "Option '--spo-url' must be an absolute URL.".to_string(),
            ));
        }
    }

    let connection = Connection::new(options.access_token, options.spo_url);
    connection.store()?;
    info!("Connection stored");
    Ok(None)
}

pub fn logout() -> Result<Option<Value>> {
    let existed = Connection::clear()?;
    if existed {
        info!("Connection removed");
    } else {
        info!("No stored connection to remove");
    }
    Ok(None)
}

pub fn status() -> Result<Option<Value>> {
    let connection = Connection::restore()?;
    Ok(Some(json!({
        "accessToken": "[REDACTED]",
        "spoUrl": connection.spo_url,
        "graphUrl": connection.graph_url,
    })))
}
