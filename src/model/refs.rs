//! Symbolic (name-based) references, as they appear inside bytecode operands.
//!
//! Unlike the [`ClassId`](super::ClassId)/[`MethodId`](super::MethodId)/
//! [`FieldId`](super::FieldId) indices used for the already-resolved structural
//! graph (hierarchy, call edges, override sets), instructions address their
//! operands the way the JVM's constant pool does: by owner binary name plus
//! name-and-descriptor. Resolving a [`MethodRef`]/[`FieldRef`] down to a concrete
//! [`MethodId`]/[`FieldId`] in a given [`World`](super::World) is the job of
//! [`crate::compare::resolve`].

use crate::types::{FieldType, MethodDescriptor};

/// A reference to a class by its binary name (e.g. `java/lang/Object`).
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{binary_name}")]
pub struct ClassRef {
    /// The binary name of the class.
    pub binary_name: String,
}

impl ClassRef {
    /// Creates a new class reference.
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        Self {
            binary_name: binary_name.into(),
        }
    }
}

/// A reference to a field by owner, name, and type.
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{owner}.{name}")]
pub struct FieldRef {
    /// The class declaring the field, as referenced from the use site.
    pub owner: ClassRef,
    /// The name of the field.
    pub name: String,
    /// The type of the field.
    pub field_type: FieldType,
}

/// A reference to a method by owner, name, and descriptor.
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{owner}::{name}{descriptor}")]
pub struct MethodRef {
    /// The class declaring the method, as referenced from the use site.
    pub owner: ClassRef,
    /// The name of the method.
    pub name: String,
    /// The descriptor of the method.
    pub descriptor: MethodDescriptor,
}

impl MethodRef {
    /// The name the JVM gives to instance constructors.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";
    /// The name the JVM gives to static initializers.
    pub const CLASS_INITIALIZER_NAME: &'static str = "<clinit>";

    /// Checks whether this reference names a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == Self::CONSTRUCTOR_NAME
    }

    /// Checks whether this reference names a static initializer block.
    #[must_use]
    pub fn is_static_initializer(&self) -> bool {
        self.name == Self::CLASS_INITIALIZER_NAME
    }
}
