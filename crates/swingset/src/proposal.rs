//! # Governance Proposal Content
//!
//! The core-eval proposal: a governance payload asking the chain to evaluate
//! JavaScript code in the swingset controller with a named set of permits.
//! It is proposal content, not a transaction message, and is registered only
//! with the interface registry: the legacy codec was never extended to
//! proposals.

use crate::ROUTER_KEY;
use serde::{Deserialize, Serialize};
use shared_codec::capability::validate_abstract;
use shared_codec::{MsgError, ProposalContent, TypeUrl};

/// One unit of code to evaluate, paired with the permits it runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreEval {
    /// JSON-encoded permit description bounding the code's authority.
    pub json_permits: String,
    /// The JavaScript source to evaluate.
    pub js_code: String,
}

/// Governance proposal content carrying one or more core evals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreEvalProposal {
    /// Proposal title, shown to voters.
    pub title: String,
    /// Proposal description, shown to voters.
    pub description: String,
    /// The evals to run if the proposal passes. Must be non-empty.
    pub evals: Vec<CoreEval>,
}

impl TypeUrl for CoreEvalProposal {
    const TYPE_URL: &'static str = "/swingset.v1.CoreEvalProposal";
}

impl ProposalContent for CoreEvalProposal {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn proposal_route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn proposal_type(&self) -> &'static str {
        "CoreEval"
    }

    fn validate_basic(&self) -> Result<(), MsgError> {
        validate_abstract(self)?;
        if self.evals.is_empty() {
            return Err(MsgError::EmptyProposal);
        }
        for eval in &self.evals {
            if eval.json_permits.is_empty() {
                return Err(MsgError::EmptyField {
                    field: "json_permits",
                });
            }
            if eval.js_code.is_empty() {
                return Err(MsgError::EmptyField { field: "js_code" });
            }
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
