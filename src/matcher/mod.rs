//! The top-level matching orchestrator (§4.6): seed the match graph from
//! non-obfuscated names, then refine level by level until a full iteration
//! adds nothing.

mod commit;
mod conflict;
mod pass;
mod seed;
mod stats;

pub use stats::MatchStats;

use tracing::{debug, info, info_span};

use crate::{
    classifier::{Level, MatchContext, class_classifiers, field_classifiers, method_classifiers},
    config::MatchConfig,
    model::World,
};

/// Runs the full matching pipeline against `world` and returns the resulting
/// match statistics. `world`'s match state is mutated in place; callers read
/// matches back off the [`World`] via its `match_cell` accessors.
pub fn run(world: &World, config: &MatchConfig) -> MatchStats {
    let _span = info_span!("match_run").entered();

    let ctx = MatchContext::build(world);
    let class_classifiers = class_classifiers();
    let method_classifiers = method_classifiers();
    let field_classifiers = field_classifiers();

    {
        let _span = info_span!("pass", kind = "seed").entered();
        let seeded = seed::seed_pass(world);
        debug!(seeded, "seed pass complete");
    }

    {
        let _span = info_span!("level", level = ?Level::Initial).entered();
        let added = pass::match_classes_pass(world, &ctx, &class_classifiers, Level::Initial, config);
        debug!(added, "initial class pass");
        if added > 0 {
            let added_again = pass::match_classes_pass(world, &ctx, &class_classifiers, Level::Initial, config);
            debug!(added_again, "initial class pass re-run");
        }
    }

    for level in [Level::Secondary, Level::Tertiary, Level::Extra] {
        let _span = info_span!("level", ?level).entered();
        loop {
            let static_methods = pass::match_methods_pass(world, &ctx, &method_classifiers, level, config, true);
            let static_fields = pass::match_fields_pass(world, &ctx, &field_classifiers, level, config, true);
            let instance_methods = pass::match_methods_pass(world, &ctx, &method_classifiers, level, config, false);
            let instance_fields = pass::match_fields_pass(world, &ctx, &field_classifiers, level, config, false);
            let members_added = static_methods + static_fields + instance_methods + instance_fields;

            let classes_added = pass::match_classes_pass(world, &ctx, &class_classifiers, level, config);
            debug!(members_added, classes_added, "refinement iteration");

            if members_added == 0 && classes_added == 0 {
                break;
            }
        }
    }

    let stats = MatchStats::collect(world);
    let classes = format!("{}/{}", stats.classes_matched, stats.classes_total);
    let methods = format!("{}/{}", stats.methods_matched, stats.methods_total);
    let fields = format!("{}/{}", stats.fields_matched, stats.fields_total);
    info!(classes, methods, fields, "match run complete");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, ClassAccessFlags, Method, MethodAccessFlags, Side};
    use crate::types::{MethodDescriptor, ReturnType};

    fn void_method_descriptor() -> MethodDescriptor {
        MethodDescriptor {
            parameters_types: vec![],
            return_type: ReturnType::Void,
        }
    }

    #[test]
    fn run_seeds_and_propagates_a_trivial_rename_only_pair() {
        let mut world = World::new();
        let a = world.push_class(|id| Class::new(id, Side::A, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC));
        let b = world.push_class(|id| Class::new(id, Side::B, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC));
        let ma = world.push_method(|id| Method::new(id, a, "doWork".to_owned(), void_method_descriptor(), MethodAccessFlags::PUBLIC, None));
        world.class_mut(a).add_method(ma);
        let mb = world.push_method(|id| Method::new(id, b, "doWork".to_owned(), void_method_descriptor(), MethodAccessFlags::PUBLIC, None));
        world.class_mut(b).add_method(mb);

        let stats = run(&world, &MatchConfig::default());

        assert_eq!(stats.classes_matched, 1);
        assert_eq!(stats.methods_matched, 1);
        assert_eq!(world.class(a).match_cell().get(), Some(b));
        assert_eq!(world.method(ma).match_cell().get(), Some(mb));
    }

    #[test]
    fn run_on_empty_world_yields_zero_stats() {
        let world = World::new();
        let stats = run(&world, &MatchConfig::default());
        assert_eq!(stats.classes_total, 0);
    }
}
