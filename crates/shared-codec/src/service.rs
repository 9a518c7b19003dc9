//! # Service Method Descriptors
//!
//! Metadata letting a dispatcher route a decoded message to the correct
//! handler entry point. Each module registers one descriptor for its
//! message-handling service during assembly; lookup happens by the incoming
//! message's structural type identifier.

/// One handler entry point of a message-handling service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name, e.g. `"DeliverInbound"`.
    pub name: &'static str,
    /// Type URL of the message this method accepts.
    pub input_type_url: &'static str,
}

/// The method set of one module's message-handling service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Fully qualified service name, e.g. `"swingset.v1.Msg"`.
    pub service_name: &'static str,
    /// Handler entry points, one per accepted message type.
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// The method accepting `type_url`, if this service declares one.
    pub fn method_by_input(&self, type_url: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.input_type_url == type_url)
    }
}
