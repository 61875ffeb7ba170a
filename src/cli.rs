//! Command-line interface for spoctl
//!
//! The CLI is subcommand-per-entity: each SharePoint or Graph entity gets
//! its own noun with `get`/`list`/… verbs underneath, mapping 1:1 onto the
//! REST endpoints. Global options control output format, interactive
//! prompting, request timeout and log verbosity and may appear before or
//! after the subcommand.

use clap::{Parser, Subcommand};

use crate::commands::adminunit::AdminUnitCommands;
use crate::commands::contenttype::ContentTypeCommands;
use crate::commands::eventreceiver::EventReceiverCommands;
use crate::commands::folder::FolderCommands;
use crate::commands::hubsite::HubSiteCommands;
use crate::commands::login::LoginOptions;
use crate::commands::web::WebCommands;
use crate::commands::webhook::WebhookCommands;
use crate::output::OutputFormat;

/// Main command-line interface structure for spoctl
///
/// # Fields
///
/// * `command` - The entity/verb to execute
/// * `output` - Result rendering, `json` (default) or `text`
/// * `no_prompt` - Fail ambiguous lookups instead of prompting
/// * `timeout_ms` - HTTP request timeout in milliseconds
/// * `verbose` / `debug` - Raise the log level on stderr
#[derive(Parser)]
#[command(
    name = "spoctl",
    about = "SharePoint Online and Microsoft 365 administration from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Never prompt interactively; ambiguous lookups fail instead
    #[arg(long, global = true)]
    pub no_prompt: bool,

    /// Request timeout in milliseconds for HTTP operations
    #[arg(short = 't', long, global = true, default_value = "5000")]
    pub timeout_ms: u64,

    /// Log progress information to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log request-level details to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands, one noun per REST entity
#[derive(Subcommand)]
pub enum Commands {
    /// Store a connection to Microsoft 365
    Login(LoginOptions),
    /// Remove the stored connection
    Logout,
    /// Show the stored connection
    Status,
    /// SharePoint webs
    #[command(subcommand)]
    Web(WebCommands),
    /// Folders within a site
    #[command(subcommand)]
    Folder(FolderCommands),
    /// Hub sites of the tenant
    #[command(subcommand)]
    Hubsite(HubSiteCommands),
    /// Content types of a web
    #[command(subcommand)]
    Contenttype(ContentTypeCommands),
    /// Event receivers of a web or site collection
    #[command(subcommand)]
    Eventreceiver(EventReceiverCommands),
    /// Webhook subscriptions of a list
    #[command(subcommand)]
    Webhook(WebhookCommands),
    /// Microsoft Entra administrative units
    #[command(subcommand)]
    Adminunit(AdminUnitCommands),
}
