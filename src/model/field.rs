//! The structural representation of a JVM field (§3).

use crate::{code::ConstantValue, types::FieldType};

use super::{ClassId, FieldAccessFlags, FieldId, MatchCell};

/// A field declared on a [`Class`](super::Class).
#[derive(Debug)]
pub struct Field {
    id: FieldId,
    owner: ClassId,
    name: String,
    field_type: FieldType,
    access_flags: FieldAccessFlags,
    constant_value: Option<ConstantValue>,
    match_: MatchCell<FieldId>,
}

impl Field {
    /// Builds a field declaration.
    #[must_use]
    pub fn new(
        id: FieldId,
        owner: ClassId,
        name: String,
        field_type: FieldType,
        access_flags: FieldAccessFlags,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            field_type,
            access_flags,
            constant_value: None,
            match_: MatchCell::new(None),
        }
    }

    /// This field's id.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The class declaring this field.
    #[must_use]
    pub fn owner(&self) -> ClassId {
        self.owner
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's type.
    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// The field's access flags.
    #[must_use]
    pub fn access_flags(&self) -> FieldAccessFlags {
        self.access_flags
    }

    /// The field's compile-time constant value, for `static final` fields that have one.
    #[must_use]
    pub fn constant_value(&self) -> Option<&ConstantValue> {
        self.constant_value.as_ref()
    }

    /// Records this field's compile-time constant value. Part of the
    /// population API a parser collaborator uses to build a
    /// [`World`](super::World) (§3, §6).
    pub fn set_constant_value(&mut self, value: ConstantValue) {
        self.constant_value = Some(value);
    }

    /// The cell backing this field's `match` relationship.
    #[must_use]
    pub fn match_cell(&self) -> &MatchCell<FieldId> {
        &self.match_
    }
}
