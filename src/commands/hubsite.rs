//! `hubsite list` / `hubsite get`: hub sites of the tenant
//!
//! Hub sites are tenant-scoped, so both commands run against the
//! SharePoint root URL of the active connection. A hub site can be fetched
//! directly by id or looked up by title; titles are not unique, so a title
//! lookup goes through the disambiguation flow.

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::commands::CommandContext;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::odata::escape_literal;
use crate::resolve::{collapse_matches, Candidate};
use crate::url_util::url_combine;
use crate::validation;

#[derive(Subcommand)]
pub enum HubSiteCommands {
    /// List hub sites of the tenant
    List,
    /// Get a specific hub site
    Get(GetOptions),
}

#[derive(Args)]
pub struct GetOptions {
    /// Id of the hub site
    #[arg(long)]
    pub id: Option<String>,

    /// Title of the hub site
    #[arg(long)]
    pub title: Option<String>,
}

pub async fn list(ctx: &CommandContext<'_>) -> Result<Value> {
    let spo_url = ctx.connection.require_spo_url()?;
    let url = url_combine(spo_url, "_api/hubsites");
    let response = ctx
        .client
        .execute(ctx.connection, &RequestDescriptor::get(url))
        .await?;
    Ok(response.get("value").cloned().unwrap_or(response))
}

pub async fn get(ctx: &CommandContext<'_>, options: GetOptions) -> Result<Value> {
    validation::require_exactly_one(&[
        ("id", options.id.is_some()),
        ("title", options.title.is_some()),
    ])?;
    if let Some(id) = &options.id {
        validation::validate_guid("id", id)?;
    }

    let spo_url = ctx.connection.require_spo_url()?;

    match (&options.id, &options.title) {
        (Some(id), _) => {
            let url = url_combine(
                spo_url,
                &format!("_api/hubsites/getbyid('{}')", escape_literal(id)),
            );
            ctx.client
                .execute(ctx.connection, &RequestDescriptor::get(url))
                .await
        }
        (None, Some(title)) => {
            let url = url_combine(
                spo_url,
                &format!("_api/hubsites?$filter=Title eq '{}'", escape_literal(title)),
            );
            let response = ctx
                .client
                .execute(ctx.connection, &RequestDescriptor::get(url))
                .await?;
            let matches = response
                .get("value")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            collapse_matches("hub site", title, matches, describe, ctx.disambiguator)
        }
        (None, None) => unreachable!("require_exactly_one guarantees an identifier"),
    }
}

fn describe(hub_site: &Value) -> Candidate {
    Candidate {
        id: hub_site
            .get("ID")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        detail: hub_site
            .get("SiteUrl")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
