//! Identifier resolution and disambiguation
//!
//! Every "get by name" command runs the same state machine once its lookup
//! query returns:
//!
//! 1. zero matches fail with a not-found error naming the lookup value;
//! 2. exactly one match proceeds;
//! 3. multiple matches are handed to the [`Disambiguate`] capability: the
//!    interactive implementation lets the operator pick one, the
//!    non-interactive implementation declines and the command fails with
//!    every matching identifier listed in server response order.
//!
//! The capability is injected, so the whole flow is testable without a
//! terminal.

use console::Term;

use crate::error::{CommandError, Result};

/// One row presented to the operator when a lookup is ambiguous.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Unique identifier of the record, as reported by the service
    pub id: String,
    /// Short human-readable description, e.g. a title or URL
    pub detail: String,
}

/// Outcome of a disambiguation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The operator picked the candidate at this index
    Selected(usize),
    /// Prompting is unavailable or the operator cancelled
    Declined,
}

/// Capability to resolve multiple name-matched candidates to one.
pub trait Disambiguate {
    fn choose(&self, entity: &str, candidates: &[Candidate]) -> Choice;
}

/// Interactive picker on the terminal. Declines automatically when stderr
/// is not attended, so piped invocations fail fast instead of hanging.
pub struct TerminalPrompt;

impl Disambiguate for TerminalPrompt {
    fn choose(&self, entity: &str, candidates: &[Candidate]) -> Choice {
        let term = Term::stderr();
        if !term.is_term() {
            return Choice::Declined;
        }

        let _ = term.write_line(&format!("Multiple {}s found. Choose one:", entity));
        for (index, candidate) in candidates.iter().enumerate() {
            let _ = term.write_line(&format!(
                "  [{}] {} ({})",
                index + 1,
                candidate.detail,
                candidate.id
            ));
        }

        loop {
            let _ = term.write_str("Selection (Enter to cancel): ");
            let line = match term.read_line() {
                Ok(line) => line,
                Err(_) => return Choice::Declined,
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Choice::Declined;
            }
            match trimmed.parse::<usize>() {
                Ok(n) if n >= 1 && n <= candidates.len() => return Choice::Selected(n - 1),
                _ => {
                    let _ = term.write_line("Enter the number of one of the listed candidates.");
                }
            }
        }
    }
}

/// Always declines; used with `--no-prompt` and in unattended contexts.
pub struct NoPrompt;

impl Disambiguate for NoPrompt {
    fn choose(&self, _entity: &str, _candidates: &[Candidate]) -> Choice {
        Choice::Declined
    }
}

/// Collapses a lookup result to exactly one record.
///
/// `entity` names the record kind for messages ("hub site"), `lookup` is
/// the literal value the query was filtered on, and `describe` renders a
/// candidate row for prompting and for the ambiguous-error listing.
pub fn collapse_matches<T>(
    entity: &str,
    lookup: &str,
    mut matches: Vec<T>,
    describe: impl Fn(&T) -> Candidate,
    disambiguator: &dyn Disambiguate,
) -> Result<T> {
    match matches.len() {
        0 => Err(CommandError::NotFound(format!(
            "The specified {} '{}' does not exist.",
            entity, lookup
        ))),
        1 => Ok(matches.swap_remove(0)),
        _ => {
            let candidates: Vec<Candidate> = matches.iter().map(&describe).collect();
            match disambiguator.choose(entity, &candidates) {
                Choice::Selected(index) if index < matches.len() => Ok(matches.remove(index)),
                _ => {
                    let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
                    Err(CommandError::Ambiguous(format!(
                        "Multiple {}s with '{}' found. Found: {}.",
                        entity,
                        lookup,
                        ids.join(", ")
                    )))
                }
            }
        }
    }
}
