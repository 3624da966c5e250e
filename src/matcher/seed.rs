//! The seed pass (§4.6): classes whose binary name was never obfuscated
//! anchor an initial match before any classifier runs at all.

use crate::model::{Side, World, is_obfuscated_name};

use super::commit;

/// Matches every unmatched, non-synthetic class in `A` whose binary name is
/// non-obfuscated against its same-named, unmatched counterpart in `B`, and
/// propagates each match into its non-obfuscated-named members.
///
/// Returns the number of classes matched this way.
pub fn seed_pass(world: &World) -> usize {
    let candidates: Vec<crate::model::ClassId> = world
        .classes_on(Side::A)
        .filter(|class| !class.is_shared_synthetic())
        .filter(|class| class.match_cell().get().is_none())
        .filter(|class| !is_obfuscated_name(class.binary_name()))
        .map(|class| class.id())
        .collect();

    let mut matched = 0;
    for a in candidates {
        let name = world.class(a).binary_name().to_owned();
        let Some(b) = world.find_class(&name, Side::B) else {
            continue;
        };
        if world.class(b).match_cell().get().is_some() {
            continue;
        }
        world.match_classes(a, b);
        commit::propagate_class_match(world, a, b);
        matched += 1;
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, ClassAccessFlags};

    #[test]
    fn seed_pass_matches_same_named_classes() {
        let mut world = World::new();
        world.push_class(|id| Class::new(id, Side::A, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC));
        world.push_class(|id| Class::new(id, Side::B, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC));

        let matched = seed_pass(&world);

        assert_eq!(matched, 1);
    }

    #[test]
    fn seed_pass_skips_obfuscated_names() {
        let mut world = World::new();
        world.push_class(|id| Class::new(id, Side::A, "a".to_owned(), ClassAccessFlags::PUBLIC));
        world.push_class(|id| Class::new(id, Side::B, "a".to_owned(), ClassAccessFlags::PUBLIC));

        assert_eq!(seed_pass(&world), 0);
    }
}
