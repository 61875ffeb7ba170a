use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::time::Duration;
use tokio::runtime::Builder;

use spoctl::cli::{Cli, Commands};
use spoctl::commands::adminunit::AdminUnitCommands;
use spoctl::commands::contenttype::ContentTypeCommands;
use spoctl::commands::eventreceiver::EventReceiverCommands;
use spoctl::commands::folder::FolderCommands;
use spoctl::commands::hubsite::HubSiteCommands;
use spoctl::commands::web::WebCommands;
use spoctl::commands::webhook::WebhookCommands;
use spoctl::commands::{self, CommandContext};
use spoctl::error::CommandError;
use spoctl::http::ApiClient;
use spoctl::output;
use spoctl::resolve::{Disambiguate, NoPrompt, TerminalPrompt};
use spoctl::session::Connection;

fn main() -> Result<()> {
    // One command per process run, strictly sequential requests; a small
    // runtime is plenty.
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    // Results go to stdout; everything else belongs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.output;
    match run(cli).await {
        Ok(Some(value)) if !value.is_null() => {
            println!("{}", output::render(format, &value));
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(err) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), err);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> std::result::Result<Option<Value>, CommandError> {
    let command = match cli.command {
        Commands::Login(options) => return commands::login::login(options),
        Commands::Logout => return commands::login::logout(),
        Commands::Status => return commands::login::status(),
        command => command,
    };

    let connection = Connection::restore()?;
    let client = ApiClient::new(Duration::from_millis(cli.timeout_ms))?;
    let disambiguator: Box<dyn Disambiguate> = if cli.no_prompt {
        Box::new(NoPrompt)
    } else {
        Box::new(TerminalPrompt)
    };
    let ctx = CommandContext {
        connection: &connection,
        client: &client,
        disambiguator: disambiguator.as_ref(),
    };

    let result = match command {
        Commands::Web(WebCommands::Get(options)) => commands::web::get(&ctx, options).await,
        Commands::Folder(FolderCommands::Get(options)) => {
            commands::folder::get(&ctx, options).await
        }
        Commands::Hubsite(HubSiteCommands::List) => commands::hubsite::list(&ctx).await,
        Commands::Hubsite(HubSiteCommands::Get(options)) => {
            commands::hubsite::get(&ctx, options).await
        }
        Commands::Contenttype(ContentTypeCommands::Get(options)) => {
            commands::contenttype::get(&ctx, options).await
        }
        Commands::Eventreceiver(EventReceiverCommands::List(options)) => {
            commands::eventreceiver::list(&ctx, options).await
        }
        Commands::Eventreceiver(EventReceiverCommands::Get(options)) => {
            commands::eventreceiver::get(&ctx, options).await
        }
        Commands::Webhook(WebhookCommands::List(options)) => {
            commands::webhook::list(&ctx, options).await
        }
        Commands::Webhook(WebhookCommands::Get(options)) => {
            commands::webhook::get(&ctx, options).await
        }
        Commands::Webhook(WebhookCommands::Add(options)) => {
            commands::webhook::add(&ctx, options).await
        }
        Commands::Webhook(WebhookCommands::Remove(options)) => {
            commands::webhook::remove(&ctx, options).await
        }
        Commands::Adminunit(AdminUnitCommands::Get(options)) => {
            commands::adminunit::get(&ctx, options).await
        }
        Commands::Login(_) | Commands::Logout | Commands::Status => {
            unreachable!("session commands return before the connection is restored")
        }
    };

    result.map(Some)
}
