//! Real-time hub descriptions.
//!
//! A hub document is a much smaller input than the API description: a
//! connection path plus flat lists of invokable methods and server-pushed
//! callbacks. The hub emitter is a single flat pass over these.

use serde::{Deserialize, Serialize};

use crate::Shape;

/// A real-time hub: connection path, invokable methods, server callbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hub {
    /// Hub endpoint path (e.g. `/hubs/notifications`).
    pub path: String,
    /// Client-invokable methods.
    pub methods: Vec<HubMethod>,
    /// Server-to-client callbacks the client can subscribe to.
    pub callbacks: Vec<HubMethod>,
}

/// One hub method or callback signature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HubMethod {
    pub name: String,
    pub params: Vec<HubParam>,
    /// Result shape for invocations; callbacks have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Shape>,
}

/// A named hub method argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubParam {
    pub name: String,
    pub shape: Shape,
}
