//! # Transaction Messages
//!
//! The four concrete message shapes the swingset module accepts. Each is a
//! single signable, executable intent submitted to the chain: it reports its
//! signer, checks its own basic well-formedness, and carries a stable type
//! URL for the interface registry.
//!
//! Execution semantics (what each message *does* once the chain accepts it)
//! live in the module's keeper, not here.

use serde::{Deserialize, Serialize};
use shared_codec::{AccAddress, Msg, MsgError, TypeUrl};

/// Delivers a batch of inbound messages from the off-chain mailbox into the
/// swingset controller, acknowledging outbound messages up to `ack`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeliverInbound {
    /// The inbound message bodies, parallel to `nums`.
    pub messages: Vec<String>,
    /// Sequence number of each message in `messages`.
    pub nums: Vec<u64>,
    /// Highest outbound sequence number the sender has processed.
    pub ack: u64,
    /// The account submitting (and signing) the delivery.
    pub submitter: AccAddress,
}

impl TypeUrl for MsgDeliverInbound {
    const TYPE_URL: &'static str = "/swingset.v1.MsgDeliverInbound";
}

impl Msg for MsgDeliverInbound {
    fn signers(&self) -> Vec<AccAddress> {
        vec![self.submitter.clone()]
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.submitter.is_empty() {
            return Err(MsgError::EmptyAddress { field: "submitter" });
        }
        if self.messages.len() != self.nums.len() {
            return Err(MsgError::LengthMismatch {
                messages: self.messages.len(),
                nums: self.nums.len(),
            });
        }
        if self.messages.iter().any(|m| m.is_empty()) {
            return Err(MsgError::EmptyField { field: "message" });
        }
        Ok(())
    }

    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Provisions a new mailbox and smart-wallet client for an address, granting
/// it the named power flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgProvision {
    /// Petname for the provisioned client.
    pub nickname: String,
    /// The address being provisioned.
    pub address: AccAddress,
    /// Capability flags granted to the client, e.g. `"SMART_WALLET"`.
    pub power_flags: Vec<String>,
    /// The account submitting (and signing) the provision.
    pub submitter: AccAddress,
}

impl TypeUrl for MsgProvision {
    const TYPE_URL: &'static str = "/swingset.v1.MsgProvision";
}

impl Msg for MsgProvision {
    fn signers(&self) -> Vec<AccAddress> {
        vec![self.submitter.clone()]
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.submitter.is_empty() {
            return Err(MsgError::EmptyAddress { field: "submitter" });
        }
        if self.address.is_empty() {
            return Err(MsgError::EmptyAddress { field: "address" });
        }
        if self.nickname.is_empty() {
            return Err(MsgError::EmptyField { field: "nickname" });
        }
        if self.power_flags.iter().any(|f| f.is_empty()) {
            return Err(MsgError::EmptyField { field: "power_flag" });
        }
        Ok(())
    }

    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// A smart-wallet action signed by the wallet's owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWalletAction {
    /// The wallet owner (and sole signer).
    pub owner: AccAddress,
    /// Marshalled action body, interpreted by the wallet contract.
    pub action: String,
}

impl TypeUrl for MsgWalletAction {
    const TYPE_URL: &'static str = "/swingset.v1.MsgWalletAction";
}

impl Msg for MsgWalletAction {
    fn signers(&self) -> Vec<AccAddress> {
        vec![self.owner.clone()]
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.owner.is_empty() {
            return Err(MsgError::EmptyAddress { field: "owner" });
        }
        if self.action.is_empty() {
            return Err(MsgError::EmptyField { field: "action" });
        }
        Ok(())
    }

    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// A smart-wallet action that may spend assets from the wallet. Kept
/// distinct from [`MsgWalletAction`] so signing policies can treat spending
/// intents more strictly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWalletSpendAction {
    /// The wallet owner (and sole signer).
    pub owner: AccAddress,
    /// Marshalled spend-action body, interpreted by the wallet contract.
    pub spend_action: String,
}

impl TypeUrl for MsgWalletSpendAction {
    const TYPE_URL: &'static str = "/swingset.v1.MsgWalletSpendAction";
}

impl Msg for MsgWalletSpendAction {
    fn signers(&self) -> Vec<AccAddress> {
        vec![self.owner.clone()]
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        if self.owner.is_empty() {
            return Err(MsgError::EmptyAddress { field: "owner" });
        }
        if self.spend_action.is_empty() {
            return Err(MsgError::EmptyField { field: "spend_action" });
        }
        Ok(())
    }

    fn type_url(&self) -> &'static str {
        Self::TYPE_URL
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
