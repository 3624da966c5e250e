//! The method classifier set (§4.2).

use crate::{
    compare::{classes_potentially_equal, methods_potentially_equal, types_potentially_equal},
    model::{ClassId, METHOD_ACCESS_BITS, METHOD_KIND_BITS, MethodId, World, is_obfuscated_name},
    similarity::{compare_matchable_sets, compare_sets},
};

use super::{Classifier, Level, MatchContext};

fn is_real_method_name(world: &World, method: MethodId) -> bool {
    !is_obfuscated_name(world.method(method).name())
}

fn is_real_class_name(world: &World, class: ClassId) -> bool {
    !is_obfuscated_name(world.class(class).binary_name())
}

fn argument_types_score(world: &World, a: MethodId, b: MethodId) -> f64 {
    let da = world.method(a).descriptor();
    let db = world.method(b).descriptor();
    compare_sets(&da.parameters_types, &db.parameters_types)
}

fn return_type_score(world: &World, a: MethodId, b: MethodId) -> f64 {
    use crate::types::ReturnType;
    let (sa, sb) = (world.method(a).owner(), world.method(b).owner());
    match (&world.method(a).descriptor().return_type, &world.method(b).descriptor().return_type) {
        (ReturnType::Void, ReturnType::Void) => 1.0,
        (ReturnType::Some(ta), ReturnType::Some(tb)) => {
            f64::from(u8::from(types_potentially_equal(world, ta, tb, world.class(sa).side(), world.class(sb).side())))
        }
        _ => 0.0,
    }
}

fn instruction_stream_score(world: &World, ctx: &MatchContext, a: MethodId, b: MethodId) -> f64 {
    use crate::compare::Site;
    use crate::walker::compare_bodies;

    let (Some(body_a), Some(body_b)) = (world.method(a).body(), world.method(b).body()) else {
        return 1.0; // non-real method: vacuous match (§4.3).
    };
    let (owner_a, owner_b) = (world.method(a).owner(), world.method(b).owner());
    let (side_a, side_b) = (world.class(owner_a).side(), world.class(owner_b).side());
    let _ = ctx;
    compare_bodies(
        Site {
            world,
            owner: owner_a,
            side: side_a,
            pc: crate::code::ProgramCounter::ZERO,
        },
        body_a,
        Site {
            world,
            owner: owner_b,
            side: side_b,
            pc: crate::code::ProgramCounter::ZERO,
        },
        body_b,
    )
}

/// The full method classifier set, in the weights and levels of §4.2.
#[must_use]
pub fn method_classifiers() -> Vec<Classifier<MethodId>> {
    vec![
        Classifier {
            name: "method-type-bits",
            weight: 10.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                super::bit_similarity(
                    world.method(a).access_flags().bits(),
                    world.method(b).access_flags().bits(),
                    METHOD_KIND_BITS.bits(),
                )
            },
        },
        Classifier {
            name: "method-access-bits",
            weight: 4.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                super::bit_similarity(
                    world.method(a).access_flags().bits(),
                    world.method(b).access_flags().bits(),
                    METHOD_ACCESS_BITS.bits(),
                )
            },
        },
        Classifier {
            name: "argument-types",
            weight: 10.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| argument_types_score(world, a, b),
        },
        Classifier {
            name: "return-type",
            weight: 5.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| return_type_score(world, a, b),
        },
        Classifier {
            name: "instruction-stream",
            weight: 3.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| instruction_stream_score(world, ctx, a, b),
        },
        Classifier {
            name: "class-refs",
            weight: 3.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                compare_matchable_sets(
                    world.method(a).class_refs(),
                    world.method(b).class_refs(),
                    |c| world.class(c).match_cell().get(),
                    |c| is_real_class_name(world, c),
                    |x, y| classes_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "string-constants",
            weight: 5.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                let strings = |m: MethodId| -> Vec<String> {
                    world
                        .method(m)
                        .body()
                        .map(|body| {
                            body.iter()
                                .filter_map(|(_, insn)| match insn {
                                    crate::code::Instruction::Ldc(crate::code::ConstantValue::String(s)) => Some(s.clone()),
                                    _ => None,
                                })
                                .collect()
                        })
                        .unwrap_or_default()
                };
                compare_sets(&strings(a), &strings(b))
            },
        },
        Classifier {
            name: "numeric-constants",
            weight: 5.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                let numerics = |m: MethodId| -> Vec<crate::code::ConstantValue> {
                    world
                        .method(m)
                        .body()
                        .map(|body| {
                            body.iter()
                                .filter_map(|(_, insn)| match insn {
                                    crate::code::Instruction::Ldc(c @ (crate::code::ConstantValue::Integer(_)
                                    | crate::code::ConstantValue::Long(_)
                                    | crate::code::ConstantValue::Float(_)
                                    | crate::code::ConstantValue::Double(_))) => Some(c.clone()),
                                    _ => None,
                                })
                                .collect()
                        })
                        .unwrap_or_default()
                };
                compare_sets(&numerics(a), &numerics(b))
            },
        },
        Classifier {
            name: "override-set",
            weight: 10.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                compare_matchable_sets(
                    world.method(a).overrides(),
                    world.method(b).overrides(),
                    |m| world.method(m).match_cell().get(),
                    |m| is_real_method_name(world, m),
                    |x, y| methods_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "call-in-refs",
            weight: 6.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                compare_matchable_sets(
                    ctx.method_callers(a),
                    ctx.method_callers(b),
                    |m| world.method(m).match_cell().get(),
                    |m| is_real_method_name(world, m),
                    |x, y| methods_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "call-out-refs",
            weight: 6.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                compare_matchable_sets(
                    ctx.method_callees(a),
                    ctx.method_callees(b),
                    |m| world.method(m).match_cell().get(),
                    |m| is_real_method_name(world, m),
                    |x, y| methods_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "field-read-refs",
            weight: 5.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                let reads = |m: crate::model::MethodId| -> Vec<crate::model::FieldId> {
                    world
                        .method(m)
                        .body()
                        .map(|body| {
                            body.iter()
                                .filter_map(|(_, insn)| match insn {
                                    crate::code::Instruction::GetField(f) | crate::code::Instruction::GetStatic(f) => {
                                        let side = world.class(world.method(m).owner()).side();
                                        world
                                            .find_class(&f.owner.binary_name, side)
                                            .and_then(|c| crate::compare::resolve_field(world, c, &f.name))
                                    }
                                    _ => None,
                                })
                                .collect()
                        })
                        .unwrap_or_default()
                };
                let _ = ctx;
                compare_matchable_sets(
                    &reads(a),
                    &reads(b),
                    |f| world.field(f).match_cell().get(),
                    |f| !is_obfuscated_name(world.field(f).name()),
                    |x, y| crate::compare::fields_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "field-write-refs",
            weight: 5.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                let writes = |m: crate::model::MethodId| -> Vec<crate::model::FieldId> {
                    world
                        .method(m)
                        .body()
                        .map(|body| {
                            body.iter()
                                .filter_map(|(_, insn)| match insn {
                                    crate::code::Instruction::PutField(f) | crate::code::Instruction::PutStatic(f) => {
                                        let side = world.class(world.method(m).owner()).side();
                                        world
                                            .find_class(&f.owner.binary_name, side)
                                            .and_then(|c| crate::compare::resolve_field(world, c, &f.name))
                                    }
                                    _ => None,
                                })
                                .collect()
                        })
                        .unwrap_or_default()
                };
                let _ = ctx;
                compare_matchable_sets(
                    &writes(a),
                    &writes(b),
                    |f| world.field(f).match_cell().get(),
                    |f| !is_obfuscated_name(world.field(f).name()),
                    |x, y| crate::compare::fields_potentially_equal(world, x, y),
                )
            },
        },
    ]
}
