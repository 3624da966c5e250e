//! The class classifier set (§4.2).

use crate::{
    compare::{classes_potentially_equal, methods_potentially_equal},
    model::{CLASS_KIND_BITS, ClassId, MethodAccessFlags, World, is_obfuscated_name},
    similarity::{compare_counts, compare_matchable_sets, compare_sets},
};

use super::{Classifier, Level, MatchContext};

fn hierarchy_depth(world: &World, class: ClassId) -> usize {
    let mut depth = 0;
    let mut current = world.class(class).superclass();
    while let Some(c) = current {
        depth += 1;
        current = world.class(c).superclass();
    }
    depth
}

fn sibling_count(world: &World, class: ClassId) -> usize {
    world.class(class).superclass().map_or(0, |parent| {
        world.class(parent).subclasses().iter().filter(|&&c| c != class).count()
    })
}

/// The best achievable method-classifier score for `method` among `candidates`
/// — the "similar methods" routine (§4.2).
fn best_method_score(world: &World, method: crate::model::MethodId, candidates: &[crate::model::MethodId]) -> f64 {
    candidates
        .iter()
        .filter(|&&c| methods_potentially_equal(world, method, c))
        .map(|&c| {
            let m = world.method(method);
            let n = world.method(c);
            let args = compare_sets(&m.descriptor().parameters_types, &n.descriptor().parameters_types);
            let ret = f64::from(u8::from(m.descriptor().return_type == n.descriptor().return_type));
            let body = match (m.body(), n.body()) {
                (Some(ba), Some(bb)) if !ba.is_empty() || !bb.is_empty() => compare_counts(ba.len(), bb.len()),
                _ => 1.0,
            };
            (args + ret + body) / 3.0
        })
        .fold(0.0_f64, f64::max)
}

fn similar_methods(world: &World, a: ClassId, b: ClassId) -> f64 {
    let methods_a = world.class(a).methods();
    let methods_b = world.class(b).methods();
    if methods_a.is_empty() {
        return 1.0;
    }
    let total: f64 = methods_a.iter().map(|&m| best_method_score(world, m, methods_b)).sum();
    total / methods_a.len() as f64
}

/// Recursively runs the method classifier set on every non-static real method
/// and averages the accepted scores (Tertiary+, §4.2).
fn members_full(world: &World, ctx: &MatchContext, a: ClassId, b: ClassId) -> f64 {
    let methods_a: Vec<_> = world
        .class(a)
        .methods()
        .iter()
        .copied()
        .filter(|&m| !world.method(m).access_flags().contains(MethodAccessFlags::STATIC))
        .filter(|&m| world.method(m).body().is_some_and(|body| !body.is_empty()))
        .collect();
    if methods_a.is_empty() {
        return 1.0;
    }

    let classifiers = super::method_classifiers::method_classifiers();
    let max = super::framework::max_score(&classifiers, Level::Initial);
    let mut accepted = Vec::new();
    for &method in &methods_a {
        let ranked = super::framework::rank(
            world,
            ctx,
            method,
            world.class(b).methods().iter().copied(),
            &classifiers,
            Level::Initial,
            |x, y| methods_potentially_equal(world, x, y),
            max,
        );
        if let Some(best) = super::framework::found_match(&ranked, max, 0.0, 0.0) {
            accepted.push(best.score / max);
        }
    }
    if accepted.is_empty() {
        return 0.0;
    }
    accepted.iter().sum::<f64>() / accepted.len() as f64
}

fn is_real_class_name(world: &World, class: ClassId) -> bool {
    !is_obfuscated_name(world.class(class).binary_name())
}

/// The full class classifier set, in the weights and levels of §4.2.
#[must_use]
pub fn class_classifiers() -> Vec<Classifier<ClassId>> {
    vec![
        Classifier {
            name: "class-kind-bits",
            weight: 20.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                super::bit_similarity(
                    world.class(a).access_flags().bits(),
                    world.class(b).access_flags().bits(),
                    CLASS_KIND_BITS.bits(),
                )
            },
        },
        Classifier {
            name: "hierarchy-depth",
            weight: 1.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| compare_counts(hierarchy_depth(world, a), hierarchy_depth(world, b)),
        },
        Classifier {
            name: "sibling-count",
            weight: 2.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| compare_counts(sibling_count(world, a), sibling_count(world, b)),
        },
        Classifier {
            name: "parent-potential-equal",
            weight: 4.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| match (world.class(a).superclass(), world.class(b).superclass()) {
                (None, None) => 1.0,
                (Some(pa), Some(pb)) => f64::from(u8::from(classes_potentially_equal(world, pa, pb))),
                _ => 0.0,
            },
        },
        Classifier {
            name: "children-set",
            weight: 3.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                compare_matchable_sets(
                    world.class(a).subclasses(),
                    world.class(b).subclasses(),
                    |c| world.class(c).match_cell().get(),
                    |c| is_real_class_name(world, c),
                    |x, y| classes_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "interfaces-set",
            weight: 3.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                compare_matchable_sets(
                    world.class(a).interfaces(),
                    world.class(b).interfaces(),
                    |c| world.class(c).match_cell().get(),
                    |c| is_real_class_name(world, c),
                    |x, y| classes_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "implementers-set",
            weight: 2.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                compare_matchable_sets(
                    world.class(a).implementers(),
                    world.class(b).implementers(),
                    |c| world.class(c).match_cell().get(),
                    |c| is_real_class_name(world, c),
                    |x, y| classes_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "method-count",
            weight: 3.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| compare_counts(world.class(a).methods().len(), world.class(b).methods().len()),
        },
        Classifier {
            name: "field-count",
            weight: 3.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| compare_counts(world.class(a).fields().len(), world.class(b).fields().len()),
        },
        Classifier {
            name: "similar-methods",
            weight: 10.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| similar_methods(world, a, b),
        },
        Classifier {
            name: "string-constants",
            weight: 8.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |_, ctx, a, b| compare_sets(ctx.string_constants(a), ctx.string_constants(b)),
        },
        Classifier {
            name: "numeric-constants",
            weight: 6.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |_, ctx, a, b| {
                let ints = compare_sets(ctx.int_constants(a), ctx.int_constants(b));
                let longs = compare_sets(ctx.long_constants(a), ctx.long_constants(b));
                let floats = compare_sets(ctx.float_constants(a), ctx.float_constants(b));
                let doubles = compare_sets(ctx.double_constants(a), ctx.double_constants(b));
                (ints + longs + floats + doubles) / 4.0
            },
        },
        Classifier {
            name: "out-class-refs",
            weight: 6.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                compare_matchable_sets(
                    ctx.class_out_refs(a),
                    ctx.class_out_refs(b),
                    |c| world.class(c).match_cell().get(),
                    |c| is_real_class_name(world, c),
                    |x, y| classes_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "in-class-refs",
            weight: 6.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                compare_matchable_sets(
                    ctx.class_in_refs(a),
                    ctx.class_in_refs(b),
                    |c| world.class(c).match_cell().get(),
                    |c| is_real_class_name(world, c),
                    |x, y| classes_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "members-full",
            weight: 10.0,
            levels: &[Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| members_full(world, ctx, a, b),
        },
    ]
}
