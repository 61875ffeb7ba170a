//! `folder get`: properties of a folder within a site
//!
//! The folder location may be given web-relative, server-relative or
//! absolute; it is normalized to a server-relative path against the web
//! before the request is built. The `--folder-url` option is deliberately
//! not expanded by the URL-option pass; normalization against the web,
//! not the tenant root, decides its meaning.

use clap::{Args, Subcommand};
use serde_json::Value;

use crate::commands::CommandContext;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::odata::escape_literal;
use crate::options::{expand_url_fields, UrlField};
use crate::url_util::{get_server_relative_path, url_combine};
use crate::validation;

#[derive(Subcommand)]
pub enum FolderCommands {
    /// Get properties of a folder
    Get(GetOptions),
}

#[derive(Args)]
pub struct GetOptions {
    /// URL of the web containing the folder, absolute or server-relative
    #[arg(long)]
    pub web_url: String,

    /// Folder location, web-relative, server-relative or absolute
    #[arg(long)]
    pub folder_url: String,
}

pub async fn get(ctx: &CommandContext<'_>, mut options: GetOptions) -> Result<Value> {
    validation::validate_sharepoint_url("web-url", &options.web_url)?;
    expand_url_fields(
        ctx.connection,
        vec![UrlField::new("web-url", &mut options.web_url)],
    )?;

    let server_relative = get_server_relative_path(&options.web_url, &options.folder_url);
    let url = url_combine(
        &options.web_url,
        &format!(
            "_api/web/GetFolderByServerRelativePath(DecodedUrl='{}')",
            escape_literal(&server_relative)
        ),
    );
    ctx.client
        .execute(ctx.connection, &RequestDescriptor::get(url))
        .await
}

#[cfg(test)]
mod tests {
    use crate::url_util::get_server_relative_path;

    #[test]
    fn test_folder_path_normalization_against_web() {
        // web-relative, server-relative and absolute inputs all land on
        // the same server-relative path
        let web = "https://contoso.sharepoint.com/sites/team1";
        assert_eq!(
            get_server_relative_path(web, "Shared Documents"),
            "/sites/team1/Shared Documents"
        );
        assert_eq!(
            get_server_relative_path(web, "/sites/team1/Shared Documents"),
            "/sites/team1/Shared Documents"
        );
        assert_eq!(
            get_server_relative_path(
                web,
                "https://contoso.sharepoint.com/sites/team1/Shared Documents"
            ),
            "/sites/team1/Shared Documents"
        );
    }
}
