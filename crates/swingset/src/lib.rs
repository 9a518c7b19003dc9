//! # Swingset Module
//!
//! Wire-visible types of the swingset chain module and their codec
//! registration. The module exposes a closed set of concrete types:
//!
//! - four signable transaction messages ([`msgs`]): deliver-inbound,
//!   provision, wallet-action, wallet-spend-action;
//! - one governance proposal content type ([`proposal`]): core-eval.
//!
//! Every one of them must be registered in *both* encoding schemes, the
//! legacy name codec and the interface registry, before the node serves
//! traffic, or peers running compatible software will have their
//! transactions rejected or misread. [`codec`] holds that registration
//! contract; the application's assembly routine calls it once per registry
//! during startup, strictly before any concurrent request processing.

pub mod codec;
pub mod msgs;
pub mod proposal;

pub use codec::{
    module_codec, msg_service_descriptor, register_interfaces, register_legacy_codec,
};
pub use msgs::{MsgDeliverInbound, MsgProvision, MsgWalletAction, MsgWalletSpendAction};
pub use proposal::{CoreEval, CoreEvalProposal};

/// The module's name, the namespace prefix of every legacy codec name it
/// registers. Unique across the application's module set.
pub const MODULE_NAME: &str = "swingset";

/// The governance router key this module's proposal content is routed by.
pub const ROUTER_KEY: &str = MODULE_NAME;
