//! The structural representation of a JVM method (§3).

use crate::{code::MethodBody, types::MethodDescriptor};

use super::{ClassId, MatchCell, MethodAccessFlags, MethodId, MethodRef};

/// A method or constructor declared on a [`Class`](super::Class).
#[derive(Debug)]
pub struct Method {
    id: MethodId,
    owner: ClassId,
    name: String,
    descriptor: MethodDescriptor,
    access_flags: MethodAccessFlags,
    body: Option<MethodBody>,
    overrides: Vec<MethodId>,
    class_refs: Vec<ClassId>,
    match_: MatchCell<MethodId>,
}

impl Method {
    /// Builds a method declaration with an empty override set; edges are added
    /// once the whole hierarchy has been loaded (§4.5).
    #[must_use]
    pub fn new(
        id: MethodId,
        owner: ClassId,
        name: String,
        descriptor: MethodDescriptor,
        access_flags: MethodAccessFlags,
        body: Option<MethodBody>,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            descriptor,
            access_flags,
            body,
            overrides: Vec::new(),
            class_refs: Vec::new(),
            match_: MatchCell::new(None),
        }
    }

    /// This method's id.
    #[must_use]
    pub fn id(&self) -> MethodId {
        self.id
    }

    /// The class declaring this method.
    #[must_use]
    pub fn owner(&self) -> ClassId {
        self.owner
    }

    /// The method's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The method's descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &MethodDescriptor {
        &self.descriptor
    }

    /// The method's access flags.
    #[must_use]
    pub fn access_flags(&self) -> MethodAccessFlags {
        self.access_flags
    }

    /// The decoded instructions of this method, absent for abstract and native methods.
    #[must_use]
    pub fn body(&self) -> Option<&MethodBody> {
        self.body.as_ref()
    }

    /// Whether this method has a name the JVM itself assigns (`<init>`/`<clinit>`),
    /// which can never be obfuscated and therefore always anchors a name match.
    #[must_use]
    pub fn has_jvm_assigned_name(&self) -> bool {
        self.name == MethodRef::CONSTRUCTOR_NAME || self.name == MethodRef::CLASS_INITIALIZER_NAME
    }

    /// The methods in supertypes that this method directly overrides.
    #[must_use]
    pub fn overrides(&self) -> &[MethodId] {
        &self.overrides
    }

    /// The classes this method's body refers to (`new`, casts, field and call
    /// owners) — the §3 class type-refs attribute.
    #[must_use]
    pub fn class_refs(&self) -> &[ClassId] {
        &self.class_refs
    }

    /// Records a method in a supertype that this one overrides. Part of the
    /// hierarchy-linking step a parser collaborator runs after loading both
    /// class groups (§4.5).
    pub fn add_overrides(&mut self, overridden: MethodId) {
        self.overrides.push(overridden);
    }

    /// Records a class this method's body refers to. Populated by the same
    /// linking step as [`Self::add_overrides`].
    pub fn add_class_ref(&mut self, class: ClassId) {
        self.class_refs.push(class);
    }

    /// The cell backing this method's `match` relationship.
    #[must_use]
    pub fn match_cell(&self) -> &MatchCell<MethodId> {
        &self.match_
    }
}
