//! Non-generic JVM type system: field types, primitive types, and method descriptors.

pub mod field_type;
pub mod method_descriptor;

pub use field_type::{FieldType, PrimitiveType};
pub use method_descriptor::{InvalidDescriptor, MethodDescriptor, ReturnType};
