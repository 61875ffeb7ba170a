//! `web get`: properties of a SharePoint web

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::commands::CommandContext;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::options::{expand_url_fields, UrlField};
use crate::url_util::url_combine;
use crate::validation;

#[derive(Subcommand)]
pub enum WebCommands {
    /// Get properties of a web
    Get(GetOptions),
}

#[derive(Args)]
pub struct GetOptions {
    /// URL of the web, absolute or server-relative
    #[arg(long)]
    pub web_url: String,
}

pub async fn get(ctx: &CommandContext<'_>, mut options: GetOptions) -> Result<Value> {
    validation::validate_sharepoint_url("web-url", &options.web_url)?;
    expand_url_fields(
        ctx.connection,
        vec![UrlField::new("web-url", &mut options.web_url)],
    )?;

    let url = url_combine(&options.web_url, "_api/web");
    ctx.client
        .execute(ctx.connection, &RequestDescriptor::get(url))
        .await
}
