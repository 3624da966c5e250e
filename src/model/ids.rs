//! Arena indices into a [`World`](super::World).
//!
//! Every class, method, and field created during a match run lives in one of the
//! three arenas owned by [`World`](super::World) for the run's lifetime. Structural
//! edges (hierarchy, call graphs, override sets, and the `match` back-reference
//! itself) are indices into those arenas rather than owning pointers, which keeps
//! the graph free of reference cycles and lets worker tasks read it concurrently
//! without any locking.

use std::fmt;

use super::match_cell::RawId;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u32);

        impl $name {
            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }

        impl RawId for $name {
            fn to_raw(self) -> u32 {
                self.0
            }

            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

arena_id!(
    /// Identifies a [`Class`](super::Class) within a [`World`](super::World).
    ClassId
);
arena_id!(
    /// Identifies a [`Method`](super::Method) within a [`World`](super::World).
    MethodId
);
arena_id!(
    /// Identifies a [`Field`](super::Field) within a [`World`](super::World).
    FieldId
);
