//! The structural representation of a JVM class (§3).

use super::{ClassAccessFlags, ClassId, FieldId, MatchCell, MethodId};

/// Which revision of the artifact a class was loaded from.
///
/// A `Shared` class is a synthetic type (most commonly a `invokedynamic`
/// call-site class generated fresh by the JVM at each run, never present in
/// either class file) that the parser collaborator materializes once and the
/// matcher treats as present on both sides at once, matched to itself (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The previously-named reference revision.
    A,
    /// The obfuscated revision being named.
    B,
    /// Present conceptually on both sides; always self-matched.
    Shared,
}

/// A class, interface, enum, or annotation type.
#[derive(Debug)]
pub struct Class {
    id: ClassId,
    side: Side,
    binary_name: String,
    access_flags: ClassAccessFlags,
    superclass: Option<ClassId>,
    interfaces: Vec<ClassId>,
    subclasses: Vec<ClassId>,
    implementers: Vec<ClassId>,
    methods: Vec<MethodId>,
    fields: Vec<FieldId>,
    match_: MatchCell<ClassId>,
}

impl Class {
    /// Builds a class with no hierarchy edges or members yet; callers add those
    /// incrementally as the rest of the [`World`](super::World) is built, since
    /// hierarchy edges are mutually referential.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(id: ClassId, side: Side, binary_name: String, access_flags: ClassAccessFlags) -> Self {
        let match_ = if matches!(side, Side::Shared) {
            MatchCell::new(Some(id))
        } else {
            MatchCell::new(None)
        };
        Self {
            id,
            side,
            binary_name,
            access_flags,
            superclass: None,
            interfaces: Vec::new(),
            subclasses: Vec::new(),
            implementers: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            match_,
        }
    }

    /// This class's id.
    #[must_use]
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// Which side of the match this class was loaded from.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether this is a synthetic class shared between both sides (§3).
    #[must_use]
    pub fn is_shared_synthetic(&self) -> bool {
        matches!(self.side, Side::Shared)
    }

    /// The class's binary name (e.g. `com/example/Foo$Bar`).
    #[must_use]
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    /// The class's access flags.
    #[must_use]
    pub fn access_flags(&self) -> ClassAccessFlags {
        self.access_flags
    }

    /// The direct superclass, if any (absent only for `java/lang/Object`).
    #[must_use]
    pub fn superclass(&self) -> Option<ClassId> {
        self.superclass
    }

    /// The directly implemented interfaces.
    #[must_use]
    pub fn interfaces(&self) -> &[ClassId] {
        &self.interfaces
    }

    /// Classes that directly extend this one.
    #[must_use]
    pub fn subclasses(&self) -> &[ClassId] {
        &self.subclasses
    }

    /// Classes that directly implement this interface.
    #[must_use]
    pub fn implementers(&self) -> &[ClassId] {
        &self.implementers
    }

    /// The methods declared directly on this class.
    #[must_use]
    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }

    /// The fields declared directly on this class.
    #[must_use]
    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    /// Records this class's direct superclass. Part of the population API a
    /// parser collaborator uses to build a [`World`](super::World) (§3, §6).
    pub fn set_superclass(&mut self, superclass: ClassId) {
        self.superclass = Some(superclass);
    }

    /// Records a directly implemented interface. See [`Self::set_superclass`].
    pub fn add_interface(&mut self, interface: ClassId) {
        self.interfaces.push(interface);
    }

    /// Records a class that directly extends this one. See [`Self::set_superclass`].
    pub fn add_subclass(&mut self, subclass: ClassId) {
        self.subclasses.push(subclass);
    }

    /// Records a class that directly implements this interface. See [`Self::set_superclass`].
    pub fn add_implementer(&mut self, implementer: ClassId) {
        self.implementers.push(implementer);
    }

    /// Declares a method on this class. See [`Self::set_superclass`].
    pub fn add_method(&mut self, method: MethodId) {
        self.methods.push(method);
    }

    /// Declares a field on this class. See [`Self::set_superclass`].
    pub fn add_field(&mut self, field: FieldId) {
        self.fields.push(field);
    }
}

impl Class {
    /// The cell backing this class's `match` relationship.
    #[must_use]
    pub fn match_cell(&self) -> &MatchCell<ClassId> {
        &self.match_
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_synthetic_is_self_matched() {
        let class = Class::new(ClassId(0), Side::Shared, "Lambda$1".to_owned(), ClassAccessFlags::SYNTHETIC);
        assert_eq!(class.match_cell().get(), Some(ClassId(0)));
        assert!(class.is_shared_synthetic());
    }

    #[test]
    fn regular_class_starts_unmatched() {
        let class = Class::new(ClassId(1), Side::A, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC);
        assert_eq!(class.match_cell().get(), None);
    }
}
