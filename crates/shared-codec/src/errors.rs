//! # Error Types
//!
//! Codec-layer and message-validation errors.
//!
//! Note the asymmetry with registration failures: a duplicate legacy name or
//! duplicate service descriptor is a programming error made before any
//! traffic is served, so those panic during assembly instead of surfacing
//! here. Everything that can fail after startup returns one of these.

use thiserror::Error;

/// Errors from encoding or decoding through either codec facet.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The wire envelope names a legacy type that was never registered.
    #[error("no concrete type registered under legacy name: {0}")]
    UnknownLegacyName(String),

    /// The wire envelope's legacy name does not match the requested type.
    #[error("legacy name mismatch: envelope says {found}, expected {expected}")]
    NameMismatch { expected: String, found: String },

    /// Encoding was attempted for a type the codec was never told about.
    #[error("type not registered with this codec: {0}")]
    UnregisteredType(&'static str),

    /// The structural identifier has no registered implementation for the
    /// capability the decoder expects.
    #[error("no implementation registered for type URL: {0}")]
    UnknownTypeUrl(String),

    /// The legacy envelope is structurally malformed.
    #[error("malformed legacy envelope: missing {0} field")]
    MalformedEnvelope(&'static str),

    /// JSON (de)serialization failure.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary (de)serialization failure.
    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),
}

/// Errors from a message or proposal failing its basic validity check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MsgError {
    /// A signer or target address field is empty.
    #[error("{field} address must not be empty")]
    EmptyAddress { field: &'static str },

    /// A required string field is empty.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Parallel message/sequence-number arrays disagree in length.
    #[error("messages and nums must be the same length: {messages} != {nums}")]
    LengthMismatch { messages: usize, nums: usize },

    /// A proposal carries no evals to execute.
    #[error("proposal must contain at least one core eval")]
    EmptyProposal,

    /// Proposal title exceeds the governance limit.
    #[error("proposal title is longer than {max} characters: {len}")]
    TitleTooLong { len: usize, max: usize },

    /// Proposal description exceeds the governance limit.
    #[error("proposal description is longer than {max} characters: {len}")]
    DescriptionTooLong { len: usize, max: usize },
}
