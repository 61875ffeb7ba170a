//! `adminunit get`: Microsoft Entra administrative units via Graph
//!
//! Display names are not unique in Entra, so a name lookup can return any
//! number of units and goes through the disambiguation flow.

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
pub enum AdminUnitCommands {
    /// Get an administrative unit
    Get(GetOptions),
}

#[derive(Args)]
pub struct GetOptions {
    /// Id of the administrative unit
    #[arg(long)]
    pub id: Option<String>,

    /// Display name of the administrative unit
    #[arg(long)]
    pub display_name: Option<String>,
}

pub async fn get(ctx: &CommandContext<'_>, options: GetOptions) -> Result<Value> {
    validation::require_exactly_one(&[
        ("id", options.id.is_some()),
        ("display-name", options.display_name.is_some()),
    ])?;
    if let Some(id) = &options.id {
        validation::validate_guid("id", id)?;
    }

    let base = url_combine(
        &ctx.connection.graph_url,
        "v1.0/directory/administrativeUnits",
    );

    match (&options.id, &options.display_name) {
        (Some(id), _) => {
            let url = format!("{}/{}", base, id);
            ctx.client
                .execute(ctx.connection, &RequestDescriptor::graph_get(url))
                .await
        }
        (None, Some(display_name)) => {
            let url = format!(
                "{}?$filter=displayName eq '{}'",
                base,
                escape_literal(display_name)
            );
            let response = ctx
                .client
                .execute(ctx.connection, &RequestDescriptor::graph_get(url))
                .await?;
            let matches = response
                .get("value")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            collapse_matches(
                "administrative unit",
                display_name,
                matches,
                describe,
                ctx.disambiguator,
            )
        }
        (None, None) => unreachable!("require_exactly_one guarantees an identifier"),
    }
}

fn describe(unit: &Value) -> Candidate {
    Candidate {
        id: unit
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        detail: unit
            .get("displayName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
