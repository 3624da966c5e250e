//! One ranking pass over every unmatched symbol of one kind (§4.6): rank
//! candidates in parallel across the worker pool, then commit accepted
//! matches single-threaded after conflict resolution (§5).

use rayon::prelude::*;

use crate::{
    classifier::{Classifier, Level, MatchContext, found_match, max_mismatch, max_score, rank},
    compare::{classes_potentially_equal, fields_potentially_equal, methods_potentially_equal},
    config::MatchConfig,
    model::{ClassId, FieldAccessFlags, FieldId, MethodAccessFlags, MethodId, Side, World},
};

use super::commit;
use super::conflict;

fn unmatched_real_classes(world: &World, side: Side) -> Vec<ClassId> {
    world
        .classes_on(side)
        .filter(|class| !class.is_shared_synthetic())
        .filter(|class| class.match_cell().get().is_none())
        .map(|class| class.id())
        .collect()
}

fn unmatched_real_methods(world: &World, side: Side, static_only: bool) -> Vec<MethodId> {
    world
        .classes_on(side)
        .filter(|class| !class.is_shared_synthetic())
        .flat_map(|class| class.methods().iter().copied())
        .filter(|&m| world.method(m).match_cell().get().is_none())
        .filter(|&m| world.method(m).access_flags().contains(MethodAccessFlags::STATIC) == static_only)
        .collect()
}

fn unmatched_real_fields(world: &World, side: Side, static_only: bool) -> Vec<FieldId> {
    world
        .classes_on(side)
        .filter(|class| !class.is_shared_synthetic())
        .flat_map(|class| class.fields().iter().copied())
        .filter(|&f| world.field(f).match_cell().get().is_none())
        .filter(|&f| world.field(f).access_flags().contains(FieldAccessFlags::STATIC) == static_only)
        .collect()
}

/// Ranks every unmatched real class in `A` against every unmatched real class
/// in `B`, resolves conflicts, and commits the survivors. Returns the number
/// of classes matched.
pub fn match_classes_pass(world: &World, ctx: &MatchContext, classifiers: &[Classifier<ClassId>], level: Level, config: &MatchConfig) -> usize {
    let sources = unmatched_real_classes(world, Side::A);
    let candidates = unmatched_real_classes(world, Side::B);
    if sources.is_empty() || candidates.is_empty() {
        return 0;
    }
    let max = max_score(classifiers, level);
    let budget = max_mismatch(max, config.absolute_matching_threshold, config.relative_matching_threshold);

    let proposals: Vec<(ClassId, ClassId)> = sources
        .par_iter()
        .filter_map(|&source| {
            let ranked = rank(
                world,
                ctx,
                source,
                candidates.iter().copied(),
                classifiers,
                level,
                |a, b| classes_potentially_equal(world, a, b),
                budget,
            );
            found_match(&ranked, max, config.absolute_matching_threshold, config.relative_matching_threshold).map(|best| (source, best.subject))
        })
        .collect();

    let resolved = conflict::resolve(proposals);
    for (a, b) in &resolved {
        world.match_classes(*a, *b);
        commit::propagate_class_match(world, *a, *b);
    }
    resolved.len()
}

/// Ranks every unmatched real method of the requested staticness in `A`
/// against those in `B`, resolves conflicts, and commits the survivors.
pub fn match_methods_pass(
    world: &World,
    ctx: &MatchContext,
    classifiers: &[Classifier<MethodId>],
    level: Level,
    config: &MatchConfig,
    static_only: bool,
) -> usize {
    let sources = unmatched_real_methods(world, Side::A, static_only);
    let candidates = unmatched_real_methods(world, Side::B, static_only);
    if sources.is_empty() || candidates.is_empty() {
        return 0;
    }
    let max = max_score(classifiers, level);
    let budget = max_mismatch(max, config.absolute_matching_threshold, config.relative_matching_threshold);

    let proposals: Vec<(MethodId, MethodId)> = sources
        .par_iter()
        .filter_map(|&source| {
            let ranked = rank(
                world,
                ctx,
                source,
                candidates.iter().copied(),
                classifiers,
                level,
                |a, b| methods_potentially_equal(world, a, b),
                budget,
            );
            found_match(&ranked, max, config.absolute_matching_threshold, config.relative_matching_threshold).map(|best| (source, best.subject))
        })
        .collect();

    let resolved = conflict::resolve(proposals);
    for (a, b) in &resolved {
        world.match_methods(*a, *b);
        commit::propagate_method_match(world, *a, *b, true);
    }
    resolved.len()
}

/// Ranks every unmatched real field of the requested staticness in `A`
/// against those in `B`, resolves conflicts, and commits the survivors.
pub fn match_fields_pass(
    world: &World,
    ctx: &MatchContext,
    classifiers: &[Classifier<FieldId>],
    level: Level,
    config: &MatchConfig,
    static_only: bool,
) -> usize {
    let sources = unmatched_real_fields(world, Side::A, static_only);
    let candidates = unmatched_real_fields(world, Side::B, static_only);
    if sources.is_empty() || candidates.is_empty() {
        return 0;
    }
    let max = max_score(classifiers, level);
    let budget = max_mismatch(max, config.absolute_matching_threshold, config.relative_matching_threshold);

    let proposals: Vec<(FieldId, FieldId)> = sources
        .par_iter()
        .filter_map(|&source| {
            let ranked = rank(
                world,
                ctx,
                source,
                candidates.iter().copied(),
                classifiers,
                level,
                |a, b| fields_potentially_equal(world, a, b),
                budget,
            );
            found_match(&ranked, max, config.absolute_matching_threshold, config.relative_matching_threshold).map(|best| (source, best.subject))
        })
        .collect();

    let resolved = conflict::resolve(proposals);
    for (a, b) in &resolved {
        world.match_fields(*a, *b);
    }
    resolved.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::class_classifiers;
    use crate::model::{Class, ClassAccessFlags};

    #[test]
    fn match_classes_pass_matches_structurally_identical_obfuscated_classes() {
        let mut world = World::new();
        world.push_class(|id| Class::new(id, Side::A, "a".to_owned(), ClassAccessFlags::PUBLIC | ClassAccessFlags::FINAL));
        world.push_class(|id| Class::new(id, Side::B, "b".to_owned(), ClassAccessFlags::PUBLIC | ClassAccessFlags::FINAL));
        let ctx = MatchContext::build(&world);
        let classifiers = class_classifiers();
        let config = MatchConfig::default();

        let matched = match_classes_pass(&world, &ctx, &classifiers, Level::Initial, &config);

        assert_eq!(matched, 1);
    }
}
