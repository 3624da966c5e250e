//! Potential-equality predicates (§4.1): a cheap filter run before a classifier
//! bothers scoring a candidate pair at all.

use crate::{
    model::{ClassId, FieldAccessFlags, FieldId, MethodAccessFlags, MethodId, Side, World, is_obfuscated_name},
    types::FieldType,
};

fn names_potentially_equal(a: &str, b: &str) -> bool {
    let a_real = !is_obfuscated_name(a);
    let b_real = !is_obfuscated_name(b);
    if a_real != b_real {
        return false;
    }
    !a_real || a == b
}

/// Two classes are potentially equal if they are the same class, already
/// matched to each other, or have non-obfuscated names that agree (obfuscated
/// names carry no information either way).
#[must_use]
pub fn classes_potentially_equal(world: &World, a: ClassId, b: ClassId) -> bool {
    if a == b {
        return true;
    }
    if world.class(a).match_cell().get() == Some(b) {
        return true;
    }
    names_potentially_equal(world.class(a).binary_name(), world.class(b).binary_name())
}

/// Two methods are potentially equal under the class rule, plus: if neither is
/// static, their owners must also be potentially equal.
#[must_use]
pub fn methods_potentially_equal(world: &World, a: MethodId, b: MethodId) -> bool {
    if a == b {
        return true;
    }
    if world.method(a).match_cell().get() == Some(b) {
        return true;
    }
    let (ma, mb) = (world.method(a), world.method(b));
    if !names_potentially_equal(ma.name(), mb.name()) {
        return false;
    }
    let a_static = ma.access_flags().contains(MethodAccessFlags::STATIC);
    let b_static = mb.access_flags().contains(MethodAccessFlags::STATIC);
    if a_static || b_static {
        return true;
    }
    classes_potentially_equal(world, ma.owner(), mb.owner())
}

/// Two fields are potentially equal under the same rule as methods.
#[must_use]
pub fn fields_potentially_equal(world: &World, a: FieldId, b: FieldId) -> bool {
    if a == b {
        return true;
    }
    if world.field(a).match_cell().get() == Some(b) {
        return true;
    }
    let (fa, fb) = (world.field(a), world.field(b));
    if !names_potentially_equal(fa.name(), fb.name()) {
        return false;
    }
    let a_static = fa.access_flags().contains(FieldAccessFlags::STATIC);
    let b_static = fb.access_flags().contains(FieldAccessFlags::STATIC);
    if a_static || b_static {
        return true;
    }
    classes_potentially_equal(world, fa.owner(), fb.owner())
}

/// Two field types are potentially equal: primitives must match exactly, array
/// types recurse on the element type, and object types recurse on the named
/// class, resolved on its own group's side.
#[must_use]
pub fn types_potentially_equal(world: &World, a: &FieldType, b: &FieldType, side_a: Side, side_b: Side) -> bool {
    match (a, b) {
        (FieldType::Base(pa), FieldType::Base(pb)) => pa == pb,
        (FieldType::Array(ea), FieldType::Array(eb)) => types_potentially_equal(world, ea, eb, side_a, side_b),
        (FieldType::Object(ra), FieldType::Object(rb)) => {
            match (
                world.find_class(&ra.binary_name, side_a),
                world.find_class(&rb.binary_name, side_b),
            ) {
                (Some(ca), Some(cb)) => classes_potentially_equal(world, ca, cb),
                _ => names_potentially_equal(&ra.binary_name, &rb.binary_name),
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Class, ClassAccessFlags};

    #[test]
    fn identical_class_is_potentially_equal() {
        let mut world = World::new();
        let a = world.push_class(|id| Class::new(id, Side::A, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC));
        assert!(classes_potentially_equal(&world, a, a));
    }

    #[test]
    fn obfuscated_names_are_potentially_equal() {
        let mut world = World::new();
        let a = world.push_class(|id| Class::new(id, Side::A, "a".to_owned(), ClassAccessFlags::PUBLIC));
        let b = world.push_class(|id| Class::new(id, Side::B, "b".to_owned(), ClassAccessFlags::PUBLIC));
        assert!(classes_potentially_equal(&world, a, b));
    }

    #[test]
    fn differing_real_names_are_not_potentially_equal() {
        let mut world = World::new();
        let a = world.push_class(|id| Class::new(id, Side::A, "com/example/Foo".to_owned(), ClassAccessFlags::PUBLIC));
        let b = world.push_class(|id| Class::new(id, Side::B, "com/example/Bar".to_owned(), ClassAccessFlags::PUBLIC));
        assert!(!classes_potentially_equal(&world, a, b));
    }
}
