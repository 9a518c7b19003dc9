//! # Capability Traits
//!
//! The abstract contracts a concrete wire type may satisfy, plus the stable
//! schema identity ([`TypeUrl`]) the interface registry keys on.
//!
//! Capability membership is a compile-time property: a type implements
//! [`Msg`] or [`ProposalContent`] in its defining module, and registration
//! merely records that membership in a lookup table. Nothing here inspects
//! runtime type names.

use crate::address::AccAddress;
use crate::errors::MsgError;
use std::any::Any;
use std::fmt;

/// Maximum proposal title length, in characters.
pub const MAX_TITLE_LEN: usize = 140;

/// Maximum proposal description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// The structural type identifier for a wire-visible concrete type.
///
/// The identifier must be stable across every software version that claims
/// wire compatibility. Changing a registered type's URL is a breaking change
/// to the chain's wire format.
pub trait TypeUrl {
    /// Stable, versioned identifier, e.g. `/swingset.v1.MsgDeliverInbound`.
    const TYPE_URL: &'static str;
}

/// A signable transaction message.
///
/// Every concrete message type a module exposes on the wire implements this:
/// it can report who must sign it and check its own basic well-formedness
/// before any stateful execution happens.
pub trait Msg: fmt::Debug + Send + Sync {
    /// The accounts that must sign a transaction carrying this message.
    fn signers(&self) -> Vec<AccAddress>;

    /// Stateless well-formedness check, run before the message enters the
    /// mempool. Stateful validation happens at execution time, elsewhere.
    fn validate_basic(&self) -> Result<(), MsgError>;

    /// The structural identifier this instance was registered under.
    fn type_url(&self) -> &'static str;

    /// Downcast hook for callers that need the concrete type back after a
    /// registry decode.
    fn as_any(&self) -> &dyn Any;
}

/// Governance proposal content.
///
/// Proposal payloads are not transaction messages: they are embedded in a
/// governance proposal and executed by the governance router if the vote
/// passes.
pub trait ProposalContent: fmt::Debug + Send + Sync {
    /// Proposal title, shown to voters.
    fn title(&self) -> &str;

    /// Proposal description, shown to voters.
    fn description(&self) -> &str;

    /// The governance router key of the module that handles this content.
    fn proposal_route(&self) -> &'static str;

    /// Human-readable proposal kind, e.g. `"CoreEval"`.
    fn proposal_type(&self) -> &'static str;

    /// Stateless well-formedness check for the proposal payload.
    fn validate_basic(&self) -> Result<(), MsgError>;

    /// The structural identifier this instance was registered under.
    fn type_url(&self) -> &'static str;

    /// Downcast hook for callers that need the concrete type back after a
    /// registry decode.
    fn as_any(&self) -> &dyn Any;
}

/// Checks the fields every proposal content kind shares: a non-empty title
/// and description, both within bounded length.
pub fn validate_abstract(content: &dyn ProposalContent) -> Result<(), MsgError> {
    if content.title().is_empty() {
        return Err(MsgError::EmptyField { field: "title" });
    }
    if content.title().chars().count() > MAX_TITLE_LEN {
        return Err(MsgError::TitleTooLong {
            len: content.title().chars().count(),
            max: MAX_TITLE_LEN,
        });
    }
    if content.description().is_empty() {
        return Err(MsgError::EmptyField {
            field: "description",
        });
    }
    if content.description().chars().count() > MAX_DESCRIPTION_LEN {
        return Err(MsgError::DescriptionTooLong {
            len: content.description().chars().count(),
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}
