//! Intermediate representation for the tsugu client generator.
//!
//! The IR is the boundary between document extraction and code emission:
//!
//! ```text
//! openapi.json → Document (parsing) → Project (lowering) → emitters (codegen)
//! ```
//!
//! Every type here is a read-only input to the emitters. The emitters never
//! mutate a [`Project`]; regenerating from the same IR yields byte-identical
//! output.

mod hub;
mod operation;
mod shape;

pub use hub::{Hub, HubMethod, HubParam};
pub use operation::{
    ContentKind, HttpMethod, Operation, ParamLocation, Parameter, RequestBody,
};
pub use shape::{NamedType, Property, Shape, ShapeKind};

use serde::{Deserialize, Serialize};

/// A complete extracted API description: the input to both emitters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Named data shapes, in document order.
    pub types: Vec<NamedType>,
    /// Callable operations, in document order.
    pub operations: Vec<Operation>,
}

impl Project {
    /// Look up a named type by its declared (unsanitized) name.
    pub fn named_type(&self, name: &str) -> Option<&NamedType> {
        self.types.iter().find(|t| t.name == name)
    }
}
