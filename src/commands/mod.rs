//! Per-entity command implementations
//!
//! Every module follows the same lifecycle: validate options, expand
//! server-relative URL options against the active connection, resolve any
//! name/title to an id (prompting on ambiguity), issue the REST call and
//! return the JSON payload for rendering.

use crate::http::ApiClient;
use crate::resolve::Disambiguate;
use crate::session::Connection;

pub mod adminunit;
pub mod contenttype;
pub mod eventreceiver;
pub mod folder;
pub mod hubsite;
pub mod login;
pub mod web;
pub mod webhook;

/// Everything a command needs to execute, passed explicitly instead of
/// living in ambient globals.
pub struct CommandContext<'a> {
    pub connection: &'a Connection,
    pub client: &'a ApiClient,
    pub disambiguator: &'a dyn Disambiguate,
}
