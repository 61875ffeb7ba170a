//! `eventreceiver list` / `eventreceiver get`: event receivers of a web
//! or of its site collection

use clap::{Args, Subcommand, ValueEnum};
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
pub enum EventReceiverCommands {
    /// List event receivers
    List(ListOptions),
    /// Get a specific event receiver
    Get(GetOptions),
}

/// Whether receivers are read from the web or from the site collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReceiverScope {
    #[default]
    Web,
    Site,
}

impl ReceiverScope {
    fn endpoint(self) -> &'static str {
        match self {
            ReceiverScope::Web => "_api/web/eventreceivers",
            ReceiverScope::Site => "_api/site/eventreceivers",
        }
    }
}

impl std::fmt::Display for ReceiverScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiverScope::Web => write!(f, "web"),
            ReceiverScope::Site => write!(f, "site"),
        }
    }
}

#[derive(Args)]
pub struct ListOptions {
    /// URL of the web, absolute or server-relative
    #[arg(long)]
    pub web_url: String,

    /// Scope of the receivers
    #[arg(long, value_enum, default_value_t = ReceiverScope::Web)]
    pub scope: ReceiverScope,
}

#[derive(Args)]
pub struct GetOptions {
    /// URL of the web, absolute or server-relative
    #[arg(long)]
    pub web_url: String,

    /// Scope of the receivers
    #[arg(long, value_enum, default_value_t = ReceiverScope::Web)]
    pub scope: ReceiverScope,

    /// Id of the event receiver
    #[arg(long)]
    pub id: Option<String>,

    /// Name of the event receiver
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn list(ctx: &CommandContext<'_>, mut options: ListOptions) -> Result<Value> {
    validation::validate_sharepoint_url("web-url", &options.web_url)?;
    expand_url_fields(
        ctx.connection,
        vec![UrlField::new("web-url", &mut options.web_url)],
    )?;

    let url = url_combine(&options.web_url, options.scope.endpoint());
    let response = ctx
        .client
        .execute(ctx.connection, &RequestDescriptor::get(url))
        .await?;
    Ok(response.get("value").cloned().unwrap_or(response))
}

pub async fn get(ctx: &CommandContext<'_>, mut options: GetOptions) -> Result<Value> {
    validation::validate_sharepoint_url("web-url", &options.web_url)?;
    validation::require_exactly_one(&[
        ("id", options.id.is_some()),
        ("name", options.name.is_some()),
    ])?;
    if let Some(id) = &options.id {
        validation::validate_guid("id", id)?;
    }
    expand_url_fields(
        ctx.connection,
        vec![UrlField::new("web-url", &mut options.web_url)],
    )?;

    match (&options.id, &options.name) {
        (Some(id), _) => {
            let url = url_combine(
                &options.web_url,
                &format!("{}('{}')", options.scope.endpoint(), escape_literal(id)),
            );
            ctx.client
                .execute(ctx.connection, &RequestDescriptor::get(url))
                .await
        }
        (None, Some(name)) => {
            let url = url_combine(
                &options.web_url,
                &format!(
                    "{}?$filter=ReceiverName eq '{}'",
                    options.scope.endpoint(),
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
            collapse_matches(
                "event receiver",
                name,
                matches,
                describe,
                ctx.disambiguator,
            )
        }
        (None, None) => unreachable!("require_exactly_one guarantees an identifier"),
    }
}

fn describe(receiver: &Value) -> Candidate {
    Candidate {
        id: receiver
            .get("ReceiverId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        detail: receiver
            .get("ReceiverUrl")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}
