//! Access-flag bitsets for classes, methods, and fields.
//!
//! Kept as three separate `bitflags!` types, one per symbol kind, matching the
//! JVM specification's own per-structure flag tables rather than a single shared
//! bitset with unused bits per kind.

use bitflags::bitflags;

bitflags! {
    /// The access flags of a [`Class`](super::Class).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassAccessFlags: u16 {
        /// Declared `public`.
        const PUBLIC = 0x0001;
        /// Declared `final`.
        const FINAL = 0x0010;
        /// Treat superclass methods specially when invoked by `invokespecial`.
        const SUPER = 0x0020;
        /// Is an interface, not a class.
        const INTERFACE = 0x0200;
        /// Declared `abstract`.
        const ABSTRACT = 0x0400;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface.
        const ANNOTATION = 0x2000;
        /// Declared as an `enum` class.
        const ENUM = 0x4000;
        /// Is a module, not a class or interface.
        const MODULE = 0x8000;
    }
}

/// The subset of [`ClassAccessFlags`] the class classifiers compare bit-for-bit (§4.2).
pub const CLASS_KIND_BITS: ClassAccessFlags = ClassAccessFlags::ENUM
    .union(ClassAccessFlags::INTERFACE)
    .union(ClassAccessFlags::ANNOTATION)
    .union(ClassAccessFlags::ABSTRACT);

bitflags! {
    /// The access flags of a [`Method`](super::Method).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodAccessFlags: u16 {
        /// Declared `public`.
        const PUBLIC = 0x0001;
        /// Declared `private`.
        const PRIVATE = 0x0002;
        /// Declared `protected`.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`.
        const FINAL = 0x0010;
        /// Declared `synchronized`.
        const SYNCHRONIZED = 0x0020;
        /// A bridge method generated by the compiler.
        const BRIDGE = 0x0040;
        /// Declared with a variable number of arguments.
        const VARARGS = 0x0080;
        /// Declared `native`.
        const NATIVE = 0x0100;
        /// Declared `abstract`.
        const ABSTRACT = 0x0400;
        /// Declared `strictfp`.
        const STRICT = 0x0800;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
    }
}

/// The subset of [`MethodAccessFlags`] the method-type classifier compares (§4.2).
pub const METHOD_KIND_BITS: MethodAccessFlags = MethodAccessFlags::STATIC
    .union(MethodAccessFlags::ABSTRACT)
    .union(MethodAccessFlags::NATIVE);

/// The subset of [`MethodAccessFlags`] the method access-bits classifier compares (§4.2).
pub const METHOD_ACCESS_BITS: MethodAccessFlags = MethodAccessFlags::PUBLIC
    .union(MethodAccessFlags::PROTECTED)
    .union(MethodAccessFlags::PRIVATE)
    .union(MethodAccessFlags::FINAL)
    .union(MethodAccessFlags::SYNCHRONIZED)
    .union(MethodAccessFlags::BRIDGE)
    .union(MethodAccessFlags::VARARGS)
    .union(MethodAccessFlags::STRICT)
    .union(MethodAccessFlags::SYNTHETIC);

bitflags! {
    /// The access flags of a [`Field`](super::Field).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldAccessFlags: u16 {
        /// Declared `public`.
        const PUBLIC = 0x0001;
        /// Declared `private`.
        const PRIVATE = 0x0002;
        /// Declared `protected`.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`.
        const FINAL = 0x0010;
        /// Declared `volatile`.
        const VOLATILE = 0x0040;
        /// Declared `transient`.
        const TRANSIENT = 0x0080;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an element of an `enum` class.
        const ENUM = 0x4000;
    }
}

/// The subset of [`FieldAccessFlags`] the field access-bits classifier compares (§4.2).
pub const FIELD_ACCESS_BITS: FieldAccessFlags = FieldAccessFlags::PUBLIC
    .union(FieldAccessFlags::PROTECTED)
    .union(FieldAccessFlags::PRIVATE)
    .union(FieldAccessFlags::FINAL)
    .union(FieldAccessFlags::VOLATILE)
    .union(FieldAccessFlags::TRANSIENT)
    .union(FieldAccessFlags::SYNTHETIC);
