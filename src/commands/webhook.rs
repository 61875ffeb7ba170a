//! `webhook list` / `webhook get` / `webhook add` / `webhook remove`:
//! webhook subscriptions of a list
//!
//! The target list is addressable three ways: by GUID, by title, or by a
//! (possibly server-relative) list URL. The URL form is normalized against
//! the web with the server-relative path algebra; the other two select the
//! matching REST addressing style directly.

use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::commands::CommandContext;
use crate::error::Result;
use crate::http::RequestDescriptor;
use crate::odata::escape_literal;
use crate::options::{expand_url_fields, UrlField};
use crate::url_util::{get_server_relative_path, url_combine};
use crate::validation;

#[derive(Subcommand)]
pub enum WebhookCommands {
    /// List webhook subscriptions of a list
    List(ListOptions),
    /// Get a specific webhook subscription
    Get(GetOptions),
    /// Add a webhook subscription to a list
    Add(AddOptions),
    /// Remove a webhook subscription from a list
    Remove(RemoveOptions),
}

/// Options addressing the target list, shared by all webhook verbs
#[derive(Args)]
pub struct ListTarget {
    /// URL of the web containing the list, absolute or server-relative
    #[arg(long)]
    pub web_url: String,

    /// Id of the list
    #[arg(long)]
    pub list_id: Option<String>,

    /// Title of the list
    #[arg(long)]
    pub list_title: Option<String>,

    /// URL of the list, web-relative, server-relative or absolute
    #[arg(long)]
    pub list_url: Option<String>,
}

impl ListTarget {
    fn validate(&self) -> Result<()> {
        validation::validate_sharepoint_url("web-url", &self.web_url)?;
        validation::require_exactly_one(&[
            ("list-id", self.list_id.is_some()),
            ("list-title", self.list_title.is_some()),
            ("list-url", self.list_url.is_some()),
        ])?;
        if let Some(list_id) = &self.list_id {
            validation::validate_guid("list-id", list_id)?;
        }
        Ok(())
    }

    fn expand(&mut self, ctx: &CommandContext<'_>) -> Result<()> {
        // list-url stays out of the expansion set: it is resolved against
        // the web, not the tenant root
        expand_url_fields(
            ctx.connection,
            vec![UrlField::new("web-url", &mut self.web_url)],
        )
    }

    /// REST base URL of the addressed list.
    fn list_base_url(&self) -> String {
        if let Some(list_id) = &self.list_id {
            url_combine(
                &self.web_url,
                &format!("_api/web/lists('{}')", escape_literal(list_id)),
            )
        } else if let Some(list_title) = &self.list_title {
            url_combine(
                &self.web_url,
                &format!("_api/web/lists/GetByTitle('{}')", escape_literal(list_title)),
            )
        } else if let Some(list_url) = &self.list_url {
            let server_relative = get_server_relative_path(&self.web_url, list_url);
            url_combine(
                &self.web_url,
                &format!("_api/web/GetList('{}')", escape_literal(&server_relative)),
            )
        } else {
            // validate() rejects this combination before any caller gets here
            url_combine(&self.web_url, "_api/web/lists")
        }
    }
}

#[derive(Args)]
pub struct ListOptions {
    #[command(flatten)]
    pub target: ListTarget,
}

#[derive(Args)]
pub struct GetOptions {
    #[command(flatten)]
    pub target: ListTarget,

    /// Id of the webhook subscription
    #[arg(long)]
    pub id: String,
}

#[derive(Args)]
pub struct AddOptions {
    #[command(flatten)]
    pub target: ListTarget,

    /// URL the service notifies on changes
    #[arg(long)]
    pub notification_url: String,

    /// Expiration of the subscription, ISO 8601; the service caps this at
    /// six months out
    #[arg(long)]
    pub expiration_date_time: Option<String>,
}

#[derive(Args)]
pub struct RemoveOptions {
    #[command(flatten)]
    pub target: ListTarget,

    /// Id of the webhook subscription
    #[arg(long)]
    pub id: String,
}

pub async fn list(ctx: &CommandContext<'_>, mut options: ListOptions) -> Result<Value> {
    options.target.validate()?;
    options.target.expand(ctx)?;

    let url = url_combine(&options.target.list_base_url(), "Subscriptions");
    let response = ctx
        .client
        .execute(ctx.connection, &RequestDescriptor::get(url))
        .await?;
    Ok(response.get("value").cloned().unwrap_or(response))
}

pub async fn get(ctx: &CommandContext<'_>, mut options: GetOptions) -> Result<Value> {
    options.target.validate()?;
    validation::validate_guid("id", &options.id)?;
    options.target.expand(ctx)?;

    let url = url_combine(
        &options.target.list_base_url(),
        &format!("Subscriptions('{}')", escape_literal(&options.id)),
    );
    ctx.client
        .execute(ctx.connection, &RequestDescriptor::get(url))
        .await
}

pub async fn add(ctx: &CommandContext<'_>, mut options: AddOptions) -> Result<Value> {
    options.target.validate()?;
    if !options.notification_url.starts_with("https://") {
        return Err(crate::error::CommandError::Validation(
            "Option '--notification-url' must be an https URL.".to_string(),
        ));
    }
    options.target.expand(ctx)?;

    let mut body = json!({ "notificationUrl": options.notification_url });
    if let Some(expiration) = &options.expiration_date_time {
        body["expirationDateTime"] = json!(expiration);
    }

    let url = url_combine(&options.target.list_base_url(), "Subscriptions");
    ctx.client
        .execute(ctx.connection, &RequestDescriptor::post(url, body))
        .await
}

pub async fn remove(ctx: &CommandContext<'_>, mut options: RemoveOptions) -> Result<Value> {
    options.target.validate()?;
    validation::validate_guid("id", &options.id)?;
    options.target.expand(ctx)?;

    let url = url_combine(
        &options.target.list_base_url(),
        &format!("Subscriptions('{}')", escape_literal(&options.id)),
    );
    ctx.client
        .execute(ctx.connection, &RequestDescriptor::delete(url))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(
        list_id: Option<&str>,
        list_title: Option<&str>,
        list_url: Option<&str>,
    ) -> ListTarget {
        ListTarget {
            web_url: "https://contoso.sharepoint.com/sites/team1".to_string(),
            list_id: list_id.map(String::from),
            list_title: list_title.map(String::from),
            list_url: list_url.map(String::from),
        }
    }

    #[test]
    fn test_list_base_url_by_id() {
        let target = target(Some("dfddade1-4729-428d-881e-7fedf3cae50d"), None, None);
        assert_eq!(
            target.list_base_url(),
            "https://contoso.sharepoint.com/sites/team1/_api/web/lists('dfddade1-4729-428d-881e-7fedf3cae50d')"
        );
    }

    #[test]
    fn test_list_base_url_by_title_escapes_quotes() {
        let target = target(None, Some("Team's Docs"), None);
        assert_eq!(
            target.list_base_url(),
            "https://contoso.sharepoint.com/sites/team1/_api/web/lists/GetByTitle('Team''s Docs')"
        );
    }

    #[test]
    fn test_list_base_url_by_web_relative_url() {
        let target = target(None, None, Some("Lists/MyList"));
        assert_eq!(
            target.list_base_url(),
            "https://contoso.sharepoint.com/sites/team1/_api/web/GetList('/sites/team1/Lists/MyList')"
        );
    }

    #[test]
    fn test_validate_rejects_multiple_identifiers() {
        let target = target(
            Some("dfddade1-4729-428d-881e-7fedf3cae50d"),
            Some("Documents"),
            None,
        );
        assert!(target.validate().is_err());
    }
}
