//! # Codec Registration
//!
//! Registers the module's concrete types with both encoding schemes. The two
//! registrations are populated from the same closed type set and must never
//! disagree about which types exist: a type present in one facet but not the
//! other will make the node reject or misread transactions from peers
//! running compatible software.
//!
//! Called by the application's assembly routine, once per registry, before
//! any request processing starts.

use crate::msgs::{MsgDeliverInbound, MsgProvision, MsgWalletAction, MsgWalletSpendAction};
use crate::proposal::CoreEvalProposal;
use crate::MODULE_NAME;
use shared_codec::{
    InterfaceRegistry, LegacyCodec, MethodDescriptor, SealedLegacyCodec, ServiceDescriptor,
    TypeUrl,
};
use tracing::debug;

/// Register the module's concrete message types on the legacy codec, each
/// under `<module>/<TypeName>`.
///
/// Sealing is deliberately left to the caller: every module must finish
/// registering into the shared codec before the application seals it.
pub fn register_legacy_codec(cdc: &mut LegacyCodec) {
    debug!("[{}] Registering legacy codec names", MODULE_NAME);
    cdc.register_concrete::<MsgDeliverInbound>(&format!("{MODULE_NAME}/DeliverInbound"));
    cdc.register_concrete::<MsgProvision>(&format!("{MODULE_NAME}/Provision"));
    cdc.register_concrete::<MsgWalletAction>(&format!("{MODULE_NAME}/WalletAction"));
    cdc.register_concrete::<MsgWalletSpendAction>(&format!("{MODULE_NAME}/WalletSpendAction"));
}

/// Register the module's capability implementations and service descriptor
/// with the interface registry.
///
/// After this returns, any wire envelope whose structural identifier matches
/// one of the four message types decodes into the correct concrete type with
/// no external hint, and likewise for the proposal content type. Each
/// (capability, type) pair is registered exactly once.
pub fn register_interfaces(registry: &mut InterfaceRegistry) {
    debug!("[{}] Registering interface implementations", MODULE_NAME);
    registry.register_msg::<MsgDeliverInbound>();
    registry.register_msg::<MsgProvision>();
    registry.register_msg::<MsgWalletAction>();
    registry.register_msg::<MsgWalletSpendAction>();

    // The proposal type has no legacy name: the legacy codec was never
    // extended to proposals, and the asymmetry is part of the wire contract.
    registry.register_proposal_content::<CoreEvalProposal>();

    registry.register_service_descriptor(msg_service_descriptor());
}

/// The module's message-handling service: one handler entry point per
/// accepted message type, keyed by the message's type URL.
pub fn msg_service_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        service_name: "swingset.v1.Msg",
        methods: vec![
            MethodDescriptor {
                name: "DeliverInbound",
                input_type_url: MsgDeliverInbound::TYPE_URL,
            },
            MethodDescriptor {
                name: "Provision",
                input_type_url: MsgProvision::TYPE_URL,
            },
            MethodDescriptor {
                name: "WalletAction",
                input_type_url: MsgWalletAction::TYPE_URL,
            },
            MethodDescriptor {
                name: "WalletSpendAction",
                input_type_url: MsgWalletSpendAction::TYPE_URL,
            },
        ],
    }
}

/// Build the module's process-wide legacy codec instance: register this
/// module's names and seal.
///
/// The application's startup routine calls this once and threads the sealed
/// codec to the legacy-compatible call sites (JSON display and test
/// tooling). The full application codec additionally registers the crypto
/// public-key types before its seal; that registration belongs to the key
/// infrastructure and happens outside this module.
pub fn module_codec() -> SealedLegacyCodec {
    let mut cdc = LegacyCodec::new();
    register_legacy_codec(&mut cdc);
    cdc.seal()
}
