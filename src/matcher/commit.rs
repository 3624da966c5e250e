//! Match-commit side effects (§4.6): setting a class match transitively
//! matches its non-obfuscated-named members; setting a method match
//! transitively matches its override set.

use crate::model::{ClassId, FieldId, MethodId, World, is_obfuscated_name};

fn same_named_method(world: &World, owner: ClassId, template: MethodId) -> Option<MethodId> {
    let t = world.method(template);
    world
        .class(owner)
        .methods()
        .iter()
        .copied()
        .find(|&m| world.method(m).name() == t.name() && world.method(m).descriptor() == t.descriptor())
}

fn same_named_field(world: &World, owner: ClassId, template: FieldId) -> Option<FieldId> {
    let t = world.field(template);
    world.class(owner).fields().iter().copied().find(|&f| world.field(f).name() == t.name())
}

/// Walks `a`'s non-obfuscated-named members, matches their same-named+desc
/// counterparts on `b`, and recurses into each matched method's override set.
pub fn propagate_class_match(world: &World, a: ClassId, b: ClassId) {
    for &method_a in world.class(a).methods() {
        if world.method(method_a).match_cell().get().is_some() || is_obfuscated_name(world.method(method_a).name()) {
            continue;
        }
        let Some(method_b) = same_named_method(world, b, method_a) else {
            continue;
        };
        if world.method(method_b).match_cell().get().is_some() {
            continue;
        }
        world.match_methods(method_a, method_b);
        propagate_method_match(world, method_a, method_b, true);
    }

    for &field_a in world.class(a).fields() {
        if world.field(field_a).match_cell().get().is_some() || is_obfuscated_name(world.field(field_a).name()) {
            continue;
        }
        let Some(field_b) = same_named_field(world, b, field_a) else {
            continue;
        };
        if world.field(field_b).match_cell().get().is_some() {
            continue;
        }
        world.match_fields(field_a, field_b);
    }
}

/// Matches `a`'s override set against `b`'s by name+descriptor agreement.
/// `match_hierarchy = false` on the recursive call prevents walking back down
/// into an override's own overrides a second time via a different path.
pub fn propagate_method_match(world: &World, a: MethodId, b: MethodId, match_hierarchy: bool) {
    if !match_hierarchy {
        return;
    }
    for &override_a in world.method(a).overrides() {
        if world.method(override_a).match_cell().get().is_some() {
            continue;
        }
        let target = world.method(override_a);
        let Some(&override_b) = world
            .method(b)
            .overrides()
            .iter()
            .find(|&&ob| world.method(ob).name() == target.name() && world.method(ob).descriptor() == target.descriptor())
        else {
            continue;
        };
        if world.method(override_b).match_cell().get().is_some() {
            continue;
        }
        world.match_methods(override_a, override_b);
        propagate_method_match(world, override_a, override_b, false);
    }
}
