//! Errors raised while parsing control messages and creation arguments.

use thiserror::Error;

/// A malformed control message or creation argument.
///
/// These are diagnostics: the host reports them and keeps running, and the
/// engine state is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The selector names no known command.
    #[error("no method for '{0}'")]
    UnknownSelector(String),
    /// A required argument is missing.
    #[error("{selector}: missing argument")]
    MissingArgument {
        /// The command that was missing its argument.
        selector: &'static str,
    },
    /// A symbol was given where a number is required.
    #[error("{selector}: expected a number, got '{found}'")]
    ExpectedFloat {
        /// The command that received the symbol.
        selector: &'static str,
        /// The offending symbol.
        found: String,
    },
    /// `coeffs` was sent without any factors.
    #[error("coeffs: at least one factor is required")]
    EmptyCoefficients,
    /// An unknown creation flag.
    #[error("invalid argument '{0}'")]
    InvalidArgument(String),
    /// `-s` was not followed by a number.
    #[error("-s: missing seed")]
    MissingSeed,
}
