//! Precomputed cross-reference indices the classifiers score against.
//!
//! Resolving "who calls this method" or "who references this class" by
//! scanning every instruction on demand would make each classifier call
//! quadratic in the size of the artifact; instead the indices are built once
//! per run and shared read-only across the worker pool (§5).

use std::collections::HashMap;

use crate::{
    code::{ConstantValue, Instruction},
    compare,
    model::{ClassId, ClassRef, FieldId, MethodId, Side, World},
};

/// Everything the classifiers (§4.2) need beyond the raw [`World`]: reverse
/// reference indices computed once up front.
#[derive(Debug, Default)]
pub struct MatchContext {
    class_in_refs: HashMap<ClassId, Vec<ClassId>>,
    class_out_refs: HashMap<ClassId, Vec<ClassId>>,
    method_callers: HashMap<MethodId, Vec<MethodId>>,
    method_callees: HashMap<MethodId, Vec<MethodId>>,
    field_readers: HashMap<FieldId, Vec<MethodId>>,
    field_writers: HashMap<FieldId, Vec<MethodId>>,
    string_constants: HashMap<ClassId, Vec<String>>,
    int_constants: HashMap<ClassId, Vec<i32>>,
    long_constants: HashMap<ClassId, Vec<i64>>,
    float_constants: HashMap<ClassId, Vec<u32>>,
    double_constants: HashMap<ClassId, Vec<u64>>,
}

impl MatchContext {
    /// Scans every method body in `world` once to build the reverse indices.
    #[must_use]
    pub fn build(world: &World) -> Self {
        let mut ctx = Self::default();

        for side in [Side::A, Side::B, Side::Shared] {
            for class in world.classes_on(side) {
                for &method_id in class.methods() {
                    ctx.scan_method(world, class.id(), method_id, side);
                }
            }
        }
        ctx
    }

    fn scan_method(&mut self, world: &World, owner: ClassId, method_id: MethodId, side: Side) {
        let Some(body) = world.method(method_id).body() else {
            return;
        };
        for (_, insn) in body.iter() {
            match insn {
                Instruction::New(r) | Instruction::ANewArray(r) => {
                    self.record_class_ref(world, owner, r, side);
                }
                Instruction::GetField(f) | Instruction::GetStatic(f) => {
                    self.record_class_ref(world, owner, &f.owner, side);
                    if let Some(target) = world.find_class(&f.owner.binary_name, side).and_then(|c| compare::resolve_field(world, c, &f.name)) {
                        self.field_readers.entry(target).or_default().push(method_id);
                    }
                }
                Instruction::PutField(f) | Instruction::PutStatic(f) => {
                    self.record_class_ref(world, owner, &f.owner, side);
                    if let Some(target) = world.find_class(&f.owner.binary_name, side).and_then(|c| compare::resolve_field(world, c, &f.name)) {
                        self.field_writers.entry(target).or_default().push(method_id);
                    }
                }
                Instruction::InvokeVirtual(m)
                | Instruction::InvokeSpecial(m)
                | Instruction::InvokeStatic(m)
                | Instruction::InvokeInterface(m) => {
                    self.record_class_ref(world, owner, &m.owner, side);
                    let to_interface = matches!(insn, Instruction::InvokeInterface(_));
                    if let Some(target) = world
                        .find_class(&m.owner.binary_name, side)
                        .and_then(|c| compare::resolve_method(world, c, &m.name, &m.descriptor, to_interface))
                    {
                        self.method_callees.entry(method_id).or_default().push(target);
                        self.method_callers.entry(target).or_default().push(method_id);
                    }
                }
                Instruction::Ldc(constant) => match *constant {
                    ConstantValue::String(ref s) => {
                        self.string_constants.entry(owner).or_default().push(s.clone());
                    }
                    ConstantValue::Integer(v) => self.int_constants.entry(owner).or_default().push(v),
                    ConstantValue::Long(v) => self.long_constants.entry(owner).or_default().push(v),
                    ConstantValue::Float(v) => self.float_constants.entry(owner).or_default().push(v),
                    ConstantValue::Double(v) => self.double_constants.entry(owner).or_default().push(v),
                    ConstantValue::Class(_) | ConstantValue::MethodType(_) | ConstantValue::MethodHandle(_) => {}
                },
                _ => {}
            }
        }
    }

    fn record_class_ref(&mut self, world: &World, from: ClassId, to: &ClassRef, side: Side) {
        if let Some(target) = world.find_class(&to.binary_name, side) {
            if target != from {
                self.class_out_refs.entry(from).or_default().push(target);
                self.class_in_refs.entry(target).or_default().push(from);
            }
        }
    }

    /// Classes whose bytecode references `class` (instantiation, cast, field, or call).
    #[must_use]
    pub fn class_in_refs(&self, class: ClassId) -> &[ClassId] {
        self.class_in_refs.get(&class).map_or(&[], Vec::as_slice)
    }

    /// Classes `class`'s own members and bytecode reference.
    #[must_use]
    pub fn class_out_refs(&self, class: ClassId) -> &[ClassId] {
        self.class_out_refs.get(&class).map_or(&[], Vec::as_slice)
    }

    /// Methods that call `method`.
    #[must_use]
    pub fn method_callers(&self, method: MethodId) -> &[MethodId] {
        self.method_callers.get(&method).map_or(&[], Vec::as_slice)
    }

    /// Methods that `method` calls.
    #[must_use]
    pub fn method_callees(&self, method: MethodId) -> &[MethodId] {
        self.method_callees.get(&method).map_or(&[], Vec::as_slice)
    }

    /// Methods that read `field`.
    #[must_use]
    pub fn field_readers(&self, field: FieldId) -> &[MethodId] {
        self.field_readers.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Methods that write `field`.
    #[must_use]
    pub fn field_writers(&self, field: FieldId) -> &[MethodId] {
        self.field_writers.get(&field).map_or(&[], Vec::as_slice)
    }

    /// String constants loaded anywhere in `class`'s methods.
    #[must_use]
    pub fn string_constants(&self, class: ClassId) -> &[String] {
        self.string_constants.get(&class).map_or(&[], Vec::as_slice)
    }

    /// `int` constants loaded anywhere in `class`'s methods.
    #[must_use]
    pub fn int_constants(&self, class: ClassId) -> &[i32] {
        self.int_constants.get(&class).map_or(&[], Vec::as_slice)
    }

    /// `long` constants loaded anywhere in `class`'s methods.
    #[must_use]
    pub fn long_constants(&self, class: ClassId) -> &[i64] {
        self.long_constants.get(&class).map_or(&[], Vec::as_slice)
    }

    /// `float` constants loaded anywhere in `class`'s methods, as bit patterns.
    #[must_use]
    pub fn float_constants(&self, class: ClassId) -> &[u32] {
        self.float_constants.get(&class).map_or(&[], Vec::as_slice)
    }

    /// `double` constants loaded anywhere in `class`'s methods, as bit patterns.
    #[must_use]
    pub fn double_constants(&self, class: ClassId) -> &[u64] {
        self.double_constants.get(&class).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, ClassAccessFlags, Side};

    #[test]
    fn build_on_empty_world_yields_empty_indices() {
        let world = World::new();
        let ctx = MatchContext::build(&world);
        assert!(ctx.class_in_refs(ClassId(0)).is_empty());
    }

    #[test]
    fn record_class_ref_ignores_self_reference() {
        let mut world = World::new();
        let id = world.push_class(|id| Class::new(id, Side::A, "Self".to_owned(), ClassAccessFlags::PUBLIC));
        let mut ctx = MatchContext::default();
        let self_ref = ClassRef::new("Self");
        ctx.record_class_ref(&world, id, &self_ref, Side::A);
        assert!(ctx.class_out_refs(id).is_empty());
    }
}
