//! # Interface Registry
//!
//! The schema-identifier encoding scheme. A concrete type registered against
//! a capability can be reconstructed from wire bytes alone: the [`AnyMessage`]
//! envelope carries the type URL, and the registry maps that URL back to a
//! decoder for the concrete type.
//!
//! Unlike the legacy codec there is no seal state here: the registry is
//! append-only for the life of the process, and all registration still
//! happens during the single-threaded assembly phase.

use crate::capability::{Msg, ProposalContent, TypeUrl};
use crate::errors::CodecError;
use crate::service::{MethodDescriptor, ServiceDescriptor};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Self-describing wire envelope: a structural type identifier plus the
/// binary encoding of the value. Decoding needs no external type hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyMessage {
    /// Structural type identifier of the packed value.
    pub type_url: String,
    /// Binary encoding of the packed value.
    pub value: Vec<u8>,
}

impl AnyMessage {
    /// Pack a concrete value into the self-describing envelope.
    pub fn pack<T>(value: &T) -> Result<Self, CodecError>
    where
        T: TypeUrl + Serialize,
    {
        Ok(Self {
            type_url: T::TYPE_URL.to_string(),
            value: bincode::serialize(value)?,
        })
    }
}

type MsgDecoder = fn(&[u8]) -> Result<Box<dyn Msg>, CodecError>;
type ContentDecoder = fn(&[u8]) -> Result<Box<dyn ProposalContent>, CodecError>;

fn decode_msg_impl<T>(bytes: &[u8]) -> Result<Box<dyn Msg>, CodecError>
where
    T: Msg + DeserializeOwned + 'static,
{
    let value: T = bincode::deserialize(bytes)?;
    Ok(Box::new(value))
}

fn decode_content_impl<T>(bytes: &[u8]) -> Result<Box<dyn ProposalContent>, CodecError>
where
    T: ProposalContent + DeserializeOwned + 'static,
{
    let value: T = bincode::deserialize(bytes)?;
    Ok(Box::new(value))
}

/// Maps capability interfaces to the concrete types implementing them, and
/// service names to their method descriptors.
///
/// The two capability tables are independent: a type registered only as
/// proposal content is not decodable as a transaction message, and vice
/// versa.
#[derive(Default)]
pub struct InterfaceRegistry {
    msg_impls: HashMap<&'static str, MsgDecoder>,
    content_impls: HashMap<&'static str, ContentDecoder>,
    services: Vec<ServiceDescriptor>,
}

impl InterfaceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` as an implementation of the signable-message capability.
    ///
    /// Re-registering the same pair overwrites the identical entry; callers
    /// must not rely on that and should register each pair exactly once.
    pub fn register_msg<T>(&mut self)
    where
        T: Msg + TypeUrl + DeserializeOwned + 'static,
    {
        debug!("[InterfaceRegistry] Registering Msg impl {}", T::TYPE_URL);
        self.msg_impls.insert(T::TYPE_URL, decode_msg_impl::<T>);
    }

    /// Register `T` as an implementation of the proposal-content capability.
    pub fn register_proposal_content<T>(&mut self)
    where
        T: ProposalContent + TypeUrl + DeserializeOwned + 'static,
    {
        debug!(
            "[InterfaceRegistry] Registering ProposalContent impl {}",
            T::TYPE_URL
        );
        self.content_impls
            .insert(T::TYPE_URL, decode_content_impl::<T>);
    }

    /// Register a module's message-handling service descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the service name is already taken. Two modules claiming one
    /// service name is an assembly-sequence programming error, same class as
    /// a duplicate legacy name.
    pub fn register_service_descriptor(&mut self, descriptor: ServiceDescriptor) {
        if self
            .services
            .iter()
            .any(|s| s.service_name == descriptor.service_name)
        {
            panic!(
                "service descriptor already registered: {}",
                descriptor.service_name
            );
        }
        debug!(
            "[InterfaceRegistry] Registering service {} ({} methods)",
            descriptor.service_name,
            descriptor.methods.len()
        );
        self.services.push(descriptor);
    }

    /// Returns true if `type_url` is registered under the signable-message
    /// capability.
    pub fn implements_msg(&self, type_url: &str) -> bool {
        self.msg_impls.contains_key(type_url)
    }

    /// Returns true if `type_url` is registered under the proposal-content
    /// capability.
    pub fn implements_proposal_content(&self, type_url: &str) -> bool {
        self.content_impls.contains_key(type_url)
    }

    /// Reconstruct a signable message from its wire envelope.
    pub fn decode_msg(&self, any: &AnyMessage) -> Result<Box<dyn Msg>, CodecError> {
        let decoder = self
            .msg_impls
            .get(any.type_url.as_str())
            .ok_or_else(|| CodecError::UnknownTypeUrl(any.type_url.clone()))?;
        decoder(&any.value)
    }

    /// Reconstruct proposal content from its wire envelope.
    pub fn decode_proposal_content(
        &self,
        any: &AnyMessage,
    ) -> Result<Box<dyn ProposalContent>, CodecError> {
        let decoder = self
            .content_impls
            .get(any.type_url.as_str())
            .ok_or_else(|| CodecError::UnknownTypeUrl(any.type_url.clone()))?;
        decoder(&any.value)
    }

    /// The registered descriptor for `service_name`, if any.
    pub fn service(&self, service_name: &str) -> Option<&ServiceDescriptor> {
        self.services
            .iter()
            .find(|s| s.service_name == service_name)
    }

    /// The handler entry point accepting `type_url`, searching every
    /// registered service. This is the dispatcher's routing lookup.
    pub fn method_by_input(&self, type_url: &str) -> Option<&MethodDescriptor> {
        self.services
            .iter()
            .find_map(|s| s.method_by_input(type_url))
    }
}
