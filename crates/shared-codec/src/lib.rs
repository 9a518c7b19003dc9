//! # Shared Codec Crate
//!
//! Serialization infrastructure shared by every chain module. Two independent
//! encoding schemes live here, and both must agree about which concrete types
//! exist on the wire:
//!
//! - **Legacy codec** ([`legacy`]): a name-based scheme. Each concrete type
//!   is registered under an explicit `<module>/<TypeName>` string before it
//!   can be encoded or decoded. Still used for JSON display and test tooling.
//! - **Interface registry** ([`interfaces`]): a schema-identifier scheme.
//!   Each concrete type is registered against the capability trait it
//!   implements, keyed by its stable type URL, and can be reconstructed from
//!   wire bytes alone.
//!
//! ## Design Principles
//!
//! - **Explicit handles**: registries are constructed by the application's
//!   assembly routine and passed by reference to each module's registration
//!   function. There is no ambient global codec.
//! - **One-way seal**: the legacy codec's registration phase ends with
//!   [`legacy::LegacyCodec::seal`], which consumes the mutable codec and
//!   returns a read-only [`legacy::SealedLegacyCodec`]. Registration after
//!   sealing is a compile error, not a runtime check.
//! - **Startup-fatal duplicates**: registering two types under one legacy
//!   name panics. Wire-format names must never be silently shadowed.

pub mod address;
pub mod capability;
pub mod errors;
pub mod interfaces;
pub mod legacy;
pub mod service;

pub use address::AccAddress;
pub use capability::{Msg, ProposalContent, TypeUrl};
pub use errors::{CodecError, MsgError};
pub use interfaces::{AnyMessage, InterfaceRegistry};
pub use legacy::{LegacyCodec, SealedLegacyCodec};
pub use service::{MethodDescriptor, ServiceDescriptor};
