//! The field classifier set (§4.2).

use std::collections::{HashSet, VecDeque};

use crate::{
    compare::{fields_potentially_equal, methods_potentially_equal, types_potentially_equal},
    model::{FIELD_ACCESS_BITS, FieldAccessFlags, FieldId, World, is_obfuscated_name},
    similarity::compare_matchable_sets,
};

use super::{Classifier, Level};

fn is_real_field_name(world: &World, field: FieldId) -> bool {
    !is_obfuscated_name(world.field(field).name())
}

/// Fields of the same name shadowed anywhere in `field`'s owner's hierarchy
/// (ancestors and descendants) — the field analogue of a method's override set.
fn shadow_set(world: &World, field: FieldId) -> Vec<FieldId> {
    let f = world.field(field);
    let owner = f.owner();
    let name = f.name();

    let mut related = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([owner]);
    seen.insert(owner);

    // Ancestors.
    let mut current = world.class(owner).superclass();
    while let Some(c) = current {
        if seen.insert(c) {
            queue.push_back(c);
        }
        current = world.class(c).superclass();
    }

    // Descendants, breadth-first.
    while let Some(class) = queue.pop_front() {
        for &sub in world.class(class).subclasses() {
            if seen.insert(sub) {
                queue.push_back(sub);
            }
        }
        if class == owner {
            continue;
        }
        for &other in world.class(class).fields() {
            if world.field(other).name() == name {
                related.push(other);
            }
        }
    }
    related
}

/// The full field classifier set, in the weights and levels of §4.2.
#[must_use]
pub fn field_classifiers() -> Vec<Classifier<FieldId>> {
    vec![
        Classifier {
            name: "field-static-bit",
            weight: 10.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                let sa = world.field(a).access_flags().contains(FieldAccessFlags::STATIC);
                let sb = world.field(b).access_flags().contains(FieldAccessFlags::STATIC);
                f64::from(u8::from(sa == sb))
            },
        },
        Classifier {
            name: "field-access-bits",
            weight: 4.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                super::bit_similarity(
                    world.field(a).access_flags().bits(),
                    world.field(b).access_flags().bits(),
                    FIELD_ACCESS_BITS.bits(),
                )
            },
        },
        Classifier {
            name: "field-type",
            weight: 10.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                let (owner_a, owner_b) = (world.field(a).owner(), world.field(b).owner());
                let (side_a, side_b) = (world.class(owner_a).side(), world.class(owner_b).side());
                f64::from(u8::from(types_potentially_equal(
                    world,
                    world.field(a).field_type(),
                    world.field(b).field_type(),
                    side_a,
                    side_b,
                )))
            },
        },
        Classifier {
            name: "field-read-refs",
            weight: 6.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                compare_matchable_sets(
                    ctx.field_readers(a),
                    ctx.field_readers(b),
                    |m| world.method(m).match_cell().get(),
                    |m| !is_obfuscated_name(world.method(m).name()),
                    |x, y| methods_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "field-write-refs",
            weight: 6.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, ctx, a, b| {
                compare_matchable_sets(
                    ctx.field_writers(a),
                    ctx.field_writers(b),
                    |m| world.method(m).match_cell().get(),
                    |m| !is_obfuscated_name(world.method(m).name()),
                    |x, y| methods_potentially_equal(world, x, y),
                )
            },
        },
        Classifier {
            name: "field-initializer",
            weight: 7.0,
            levels: &[Level::Initial, Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| match (world.field(a).constant_value(), world.field(b).constant_value()) {
                (None, None) => 1.0,
                (Some(ca), Some(cb)) => f64::from(u8::from(ca == cb)),
                _ => 0.0,
            },
        },
        Classifier {
            name: "field-override-set",
            weight: 10.0,
            levels: &[Level::Secondary, Level::Tertiary, Level::Extra],
            score: |world, _, a, b| {
                compare_matchable_sets(
                    &shadow_set(world, a),
                    &shadow_set(world, b),
                    |f| world.field(f).match_cell().get(),
                    |f| is_real_field_name(world, f),
                    |x, y| fields_potentially_equal(world, x, y),
                )
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, ClassAccessFlags, Field, Side, World};
    use crate::types::FieldType;

    #[test]
    fn shadow_set_finds_same_named_field_in_subclass() {
        let mut world = World::new();
        let base = world.push_class(|id| Class::new(id, Side::A, "Base".to_owned(), ClassAccessFlags::PUBLIC));
        let derived = world.push_class(|id| Class::new(id, Side::A, "Derived".to_owned(), ClassAccessFlags::PUBLIC));
        world.class_mut(derived).set_superclass(base);
        world.class_mut(base).add_subclass(derived);

        let base_field = world.push_field(|id| Field::new(id, base, "value".to_owned(), FieldType::Base(crate::types::PrimitiveType::Int), FieldAccessFlags::empty()));
        world.class_mut(base).add_field(base_field);
        let derived_field = world.push_field(|id| Field::new(id, derived, "value".to_owned(), FieldType::Base(crate::types::PrimitiveType::Int), FieldAccessFlags::empty()));
        world.class_mut(derived).add_field(derived_field);

        let shadows = shadow_set(&world, base_field);
        assert_eq!(shadows, vec![derived_field]);
    }
}
