// spoctl: SharePoint Online / Microsoft 365 administration CLI
// Exposes the command pipeline of the spoctl application as a library

pub mod cli;
pub mod commands;
pub mod error;
pub mod http;
pub mod odata;
pub mod options;
pub mod output;
pub mod rate_limit;
pub mod resolve;
pub mod retry;
pub mod sanitize;
pub mod session;
pub mod url_util;
pub mod validation;
