//! # Codec Assembly Tests
//!
//! Exercises the application-assembly phase the way the node's startup
//! routine runs it: every module registers into one shared legacy codec,
//! the codec is sealed, and only then do readers appear.

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use shared_codec::{AccAddress, LegacyCodec};
    use std::sync::Arc;
    use std::thread;
    use swingset::{
        module_codec, register_legacy_codec, MsgDeliverInbound, MsgProvision, MsgWalletAction,
        MsgWalletSpendAction,
    };

    /// A concrete type from a hypothetical second module sharing the codec.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct MsgMintPayment {
        amount: u64,
    }

    #[test]
    fn test_registered_names_are_literal() {
        let cdc = module_codec();

        assert_eq!(
            cdc.name_of::<MsgDeliverInbound>(),
            Some("swingset/DeliverInbound")
        );
        assert_eq!(cdc.name_of::<MsgProvision>(), Some("swingset/Provision"));
        assert_eq!(
            cdc.name_of::<MsgWalletAction>(),
            Some("swingset/WalletAction")
        );
        assert_eq!(
            cdc.name_of::<MsgWalletSpendAction>(),
            Some("swingset/WalletSpendAction")
        );
        assert_eq!(cdc.len(), 4);
    }

    #[test]
    fn test_multi_module_assembly_then_seal() {
        // The application codec: swingset plus a second module, sealed once
        // all registration is done. Registration order does not matter;
        // names are unique keys.
        let mut cdc = LegacyCodec::new();
        cdc.register_concrete::<MsgMintPayment>("vbank/MintPayment");
        register_legacy_codec(&mut cdc);
        let cdc = cdc.seal();

        assert_eq!(cdc.len(), 5);
        assert!(cdc.is_registered("vbank/MintPayment"));
        assert!(cdc.is_registered("swingset/WalletAction"));
    }

    #[test]
    #[should_panic(expected = "legacy name already registered")]
    fn test_cross_module_name_collision_is_startup_fatal() {
        // A second module claiming a swingset name must terminate assembly,
        // never silently shadow the wire-format name.
        let mut cdc = LegacyCodec::new();
        register_legacy_codec(&mut cdc);
        cdc.register_concrete::<MsgMintPayment>("swingset/Provision");
    }

    #[test]
    fn test_legacy_json_envelope_shape() {
        // Legacy JSON is what display tooling shows users; the envelope
        // shape and the name inside it are part of the observable format.
        let cdc = module_codec();
        let msg = MsgWalletAction {
            owner: AccAddress::from([1u8; 20]),
            action: "{\"method\":\"executeOffer\"}".into(),
        };

        let envelope = cdc.encode_json(&msg).unwrap();
        assert_eq!(envelope["type"], "swingset/WalletAction");
        assert_eq!(envelope["value"]["action"], "{\"method\":\"executeOffer\"}");
        assert_eq!(
            envelope["value"]["owner"],
            serde_json::to_value(&msg.owner).unwrap()
        );
    }

    #[test]
    fn test_sealed_codec_reads_concurrently() {
        // Post-seal the codec is read-only; arbitrarily many threads may
        // read it with no further synchronization.
        let cdc = Arc::new(module_codec());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cdc = Arc::clone(&cdc);
                thread::spawn(move || {
                    assert!(cdc.is_registered("swingset/DeliverInbound"));
                    cdc.name_of::<MsgProvision>().unwrap().to_string()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "swingset/Provision");
        }
    }
}
