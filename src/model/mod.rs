//! The structural data model: classes, methods, fields, and the arena that owns
//! them, addressed by id so the hierarchy and the `match` relationship can be
//! built without reference cycles (§3).

mod access_flags;
mod class;
mod field;
mod group;
mod ids;
pub mod matchable;
mod match_cell;
mod method;
mod refs;

pub use access_flags::{
    CLASS_KIND_BITS, ClassAccessFlags, FIELD_ACCESS_BITS, FieldAccessFlags, METHOD_ACCESS_BITS, METHOD_KIND_BITS,
    MethodAccessFlags,
};
pub use class::{Class, Side};
pub use field::Field;
pub use group::World;
pub use ids::{ClassId, FieldId, MethodId};
pub use match_cell::MatchCell;
pub use matchable::is_obfuscated_name;
pub use method::Method;
pub use refs::{ClassRef, FieldRef, MethodRef};
