use thiserror::Error;

/// User-facing failure of a single command invocation.
///
/// Every failure path in the pipeline collapses into one of these variants.
/// The wrapped string is the final message shown to the operator; callers
/// format it completely before constructing the variant.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid option value or option combination, detected before any
    /// network call is made.
    #[error("{0}")]
    Validation(String),

    /// Required ambient state is missing, e.g. no stored connection or no
    /// SharePoint root URL to expand a server-relative option against.
    #[error("{0}")]
    Configuration(String),

    /// A name/title/url lookup returned zero matches.
    #[error("{0}")]
    NotFound(String),

    /// A lookup returned multiple matches and interactive resolution was
    /// not possible or was declined.
    #[error("{0}")]
    Ambiguous(String),

    /// The REST service reported a failure. The message is extracted from
    /// the OData or CSOM error envelope where one is present.
    #[error("{0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, CommandError>;
