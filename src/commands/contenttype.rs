//! `contenttype get`: content types of a web

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::commands::CommandContext;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::odata::escape_literal;
use crate::options::{expand_url_fields, UrlField};
use crate::resolve::{collapse_matches, Candidate};
use crate::url_util::url_combine;
use crate::validation;

#[derive(Subcommand)]
pub enum ContentTypeCommands {
    /// Get a content type from a web
    Get(GetOptions),
}

#[derive(Args)]
pub struct GetOptions {
    /// URL of the web, absolute or server-relative
    #[arg(long)]
    pub web_url: String,

    /// Id of the content type, e.g. 0x0101
    #[arg(long)]
    pub id: Option<String>,

    /// Name of the content type
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn get(ctx: &CommandContext<'_>, mut options: GetOptions) -> Result<Value> {
    validation::validate_sharepoint_url("web-url", &options.web_url)?;
    validation::require_exactly_one(&[
        ("id", options.id.is_some()),
        ("name", options.name.is_some()),
    ])?;
    if let Some(id) = &options.id {
        validation::validate_content_type_id("id", id)?;
    }
    expand_url_fields(
        ctx.connection,
        vec![UrlField::new("web-url", &mut options.web_url)],
    )?;

    match (&options.id, &options.name) {
        (Some(id), _) => {
            let url = url_combine(
                &options.web_url,
                &format!("_api/web/contenttypes('{}')", escape_literal(id)),
            );
            ctx.client
                .execute(ctx.connection, &RequestDescriptor::get(url))
                .await
        }
        (None, Some(name)) => {
            let url = url_combine(
                &options.web_url,
                &format!(
                    "_api/web/contenttypes?$filter=Name eq '{}'",
                    escape_literal(name)
                ),
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
            collapse_matches("content type", name, matches, describe, ctx.disambiguator)
        }
        (None, None) => unreachable!("require_exactly_one guarantees an identifier"),
    }
}

fn describe(content_type: &Value) -> Candidate {
    Candidate {
        id: content_type
            .get("StringId")
            .or_else(|| content_type.get("Id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        detail: content_type
            .get("Group")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
