//! The bytecode instruction comparator (§4.3): decides whether two instructions
//! from opposite sides play the same structural role.

use std::mem::discriminant;

use crate::{
    code::{ConstantValue, Instruction, MethodHandle, ProgramCounter, is_lambda_metafactory},
    model::{ClassId, Side, World},
    types::FieldType,
};

use super::{
    potential_eq::{classes_potentially_equal, fields_potentially_equal, methods_potentially_equal, types_potentially_equal},
    resolve::{resolve_field, resolve_method},
};

/// One side's worth of context the comparator needs to resolve operands.
#[derive(Clone, Copy)]
pub struct Site<'a> {
    /// The world both sides' instructions live in.
    pub world: &'a World,
    /// The class the instruction's enclosing method is declared on.
    pub owner: ClassId,
    /// Which side this instruction comes from, for resolving unqualified type names.
    pub side: Side,
    /// The program counter of the instruction being compared.
    pub pc: ProgramCounter,
}

/// Compares two instructions per the opcode-family rules of §4.3.
///
/// Returns `false` immediately if the two instructions are not the same
/// opcode family (checked by discriminant, which is cheaper and exactly as
/// precise as comparing decoded opcode numbers would be).
#[must_use]
pub fn instructions_match(a: Site<'_>, insn_a: &Instruction, b: Site<'_>, insn_b: &Instruction) -> bool {
    if discriminant(insn_a) != discriminant(insn_b) {
        return false;
    }

    match (insn_a, insn_b) {
        (Instruction::IConst(x), Instruction::IConst(y)) => x == y,
        (Instruction::BiPush(x), Instruction::BiPush(y)) => x == y,
        (Instruction::SiPush(x), Instruction::SiPush(y)) => x == y,
        (Instruction::LConst(x), Instruction::LConst(y)) => x == y,

        (Instruction::CheckCast(ta), Instruction::CheckCast(tb))
        | (Instruction::InstanceOf(ta), Instruction::InstanceOf(tb)) => {
            types_potentially_equal(a.world, ta, tb, a.side, b.side)
        }
        (Instruction::NewArray(pa), Instruction::NewArray(pb)) => pa == pb,
        (Instruction::New(ra), Instruction::New(rb)) | (Instruction::ANewArray(ra), Instruction::ANewArray(rb)) => {
            match (a.world.find_class(&ra.binary_name, a.side), b.world.find_class(&rb.binary_name, b.side)) {
                (Some(ca), Some(cb)) => classes_potentially_equal(a.world, ca, cb),
                _ => ra.binary_name == rb.binary_name,
            }
        }
        (Instruction::MultiANewArray(ta, da), Instruction::MultiANewArray(tb, db)) => {
            da == db && types_potentially_equal(a.world, ta, tb, a.side, b.side)
        }

        (Instruction::GetField(fa), Instruction::GetField(fb))
        | (Instruction::PutField(fa), Instruction::PutField(fb))
        | (Instruction::GetStatic(fa), Instruction::GetStatic(fb))
        | (Instruction::PutStatic(fa), Instruction::PutStatic(fb)) => {
            let resolved_a = a.world.find_class(&fa.owner.binary_name, a.side).and_then(|c| resolve_field(a.world, c, &fa.name));
            let resolved_b = b.world.find_class(&fb.owner.binary_name, b.side).and_then(|c| resolve_field(b.world, c, &fb.name));
            match (resolved_a, resolved_b) {
                (None, None) => true,
                (Some(_), None) | (None, Some(_)) => false,
                (Some(x), Some(y)) => fields_potentially_equal(a.world, x, y),
            }
        }

        (Instruction::InvokeVirtual(ma), Instruction::InvokeVirtual(mb))
        | (Instruction::InvokeSpecial(ma), Instruction::InvokeSpecial(mb))
        | (Instruction::InvokeStatic(ma), Instruction::InvokeStatic(mb))
        | (Instruction::InvokeInterface(ma), Instruction::InvokeInterface(mb)) => {
            let to_interface = matches!(insn_a, Instruction::InvokeInterface(_));
            let resolved_a = a
                .world
                .find_class(&ma.owner.binary_name, a.side)
                .and_then(|c| resolve_method(a.world, c, &ma.name, &ma.descriptor, to_interface));
            let resolved_b = b
                .world
                .find_class(&mb.owner.binary_name, b.side)
                .and_then(|c| resolve_method(b.world, c, &mb.name, &mb.descriptor, to_interface));
            match (resolved_a, resolved_b) {
                (None, None) => true,
                (Some(_), None) | (None, Some(_)) => false,
                (Some(x), Some(y)) => methods_potentially_equal(a.world, x, y),
            }
        }

        (
            Instruction::InvokeDynamic { bootstrap: ba, .. },
            Instruction::InvokeDynamic { bootstrap: bb, .. },
        ) => invoke_dynamic_matches(a, ba, b, bb),

        (Instruction::IfEq(ta), Instruction::IfEq(tb))
        | (Instruction::IfNe(ta), Instruction::IfNe(tb))
        | (Instruction::IfLt(ta), Instruction::IfLt(tb))
        | (Instruction::IfGe(ta), Instruction::IfGe(tb))
        | (Instruction::IfGt(ta), Instruction::IfGt(tb))
        | (Instruction::IfLe(ta), Instruction::IfLe(tb))
        | (Instruction::IfICmpEq(ta), Instruction::IfICmpEq(tb))
        | (Instruction::IfICmpNe(ta), Instruction::IfICmpNe(tb))
        | (Instruction::IfICmpLt(ta), Instruction::IfICmpLt(tb))
        | (Instruction::IfICmpGe(ta), Instruction::IfICmpGe(tb))
        | (Instruction::IfICmpGt(ta), Instruction::IfICmpGt(tb))
        | (Instruction::IfICmpLe(ta), Instruction::IfICmpLe(tb))
        | (Instruction::IfACmpEq(ta), Instruction::IfACmpEq(tb))
        | (Instruction::IfACmpNe(ta), Instruction::IfACmpNe(tb))
        | (Instruction::IfNull(ta), Instruction::IfNull(tb))
        | (Instruction::IfNonNull(ta), Instruction::IfNonNull(tb))
        | (Instruction::Goto(ta), Instruction::Goto(tb)) => {
            ta.direction_from(a.pc) == tb.direction_from(b.pc)
        }

        (Instruction::Ldc(ca), Instruction::Ldc(cb)) => constants_match(a, ca, b, cb),

        (Instruction::IInc { increment: ia, .. }, Instruction::IInc { increment: ib, .. }) => ia == ib,

        (
            Instruction::TableSwitch { range: ra, .. },
            Instruction::TableSwitch { range: rb, .. },
        ) => ra.start() == rb.start() && ra.end() == rb.end(),

        (
            Instruction::LookupSwitch { match_targets: ma, .. },
            Instruction::LookupSwitch { match_targets: mb, .. },
        ) => ma.keys().collect::<Vec<_>>() == mb.keys().collect::<Vec<_>>(),

        // Every other family (stack manipulation, arithmetic, conversions,
        // comparisons, array element access, returns, monitors, ...) carries
        // no comparison-relevant operand: matching discriminants settle it.
        _ => true,
    }
}

fn constants_match(a: Site<'_>, ca: &ConstantValue, b: Site<'_>, cb: &ConstantValue) -> bool {
    match (ca, cb) {
        (ConstantValue::Class(ta), ConstantValue::Class(tb))
            if matches!(ta, FieldType::Object(_) | FieldType::Array(_))
                && matches!(tb, FieldType::Object(_) | FieldType::Array(_)) =>
        {
            types_potentially_equal(a.world, ta, tb, a.side, b.side)
        }
        _ => ca == cb,
    }
}

fn invoke_dynamic_matches(
    a: Site<'_>,
    bootstrap_a: &crate::code::BootstrapMethod,
    b: Site<'_>,
    bootstrap_b: &crate::code::BootstrapMethod,
) -> bool {
    if !is_lambda_metafactory(&bootstrap_a.handle) || !is_lambda_metafactory(&bootstrap_b.handle) {
        return bootstrap_a.handle == bootstrap_b.handle;
    }

    let Some(ConstantValue::MethodHandle(impl_a)) = bootstrap_a.arguments.get(1) else {
        return false;
    };
    let Some(ConstantValue::MethodHandle(impl_b)) = bootstrap_b.arguments.get(1) else {
        return false;
    };
    method_handles_match(a, impl_a, b, impl_b)
}

fn method_handles_match(a: Site<'_>, ha: &MethodHandle, b: Site<'_>, hb: &MethodHandle) -> bool {
    if discriminant(ha) != discriminant(hb) {
        return false;
    }
    match (ha.method(), hb.method()) {
        (Some(ma), Some(mb)) => {
            let resolved_a = a
                .world
                .find_class(&ma.owner.binary_name, a.side)
                .and_then(|c| resolve_method(a.world, c, &ma.name, &ma.descriptor, false));
            let resolved_b = b
                .world
                .find_class(&mb.owner.binary_name, b.side)
                .and_then(|c| resolve_method(b.world, c, &mb.name, &mb.descriptor, false));
            matches!((resolved_a, resolved_b), (Some(x), Some(y)) if methods_potentially_equal(a.world, x, y))
        }
        (None, None) => true,
        _ => false,
    }
}
