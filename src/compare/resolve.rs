//! Resolution of symbolic field/method references against the declared
//! hierarchy of a [`World`] (§4.5).

use std::collections::VecDeque;

use crate::{
    model::{ClassId, FieldId, MethodAccessFlags, MethodId, World},
    types::MethodDescriptor,
};

/// Resolves a field by name, starting the search at `owner`.
///
/// 1. A field declared directly on `owner`.
/// 2. A BFS over `owner`'s direct and transitive interfaces, in declaration order.
/// 3. Repeat from each ancestor up the superclass chain.
#[must_use]
pub fn resolve_field(world: &World, owner: ClassId, name: &str) -> Option<FieldId> {
    let mut class = Some(owner);
    while let Some(current) = class {
        if let Some(field) = direct_field(world, current, name) {
            return Some(field);
        }
        if let Some(field) = bfs_interfaces(world, current, |iface| direct_field(world, iface, name)) {
            return Some(field);
        }
        class = world.class(current).superclass();
    }
    None
}

fn direct_field(world: &World, owner: ClassId, name: &str) -> Option<FieldId> {
    world
        .class(owner)
        .fields()
        .iter()
        .copied()
        .find(|&id| world.field(id).name() == name)
}

/// Resolves a method by name and descriptor.
///
/// `to_interface` distinguishes an `invokeinterface`-style lookup from a
/// virtual (`invokevirtual`/`invokespecial`) one: a virtual call also searches
/// the superclass chain before falling back to interface-method resolution, an
/// interface call only falls back to a concrete superclass method if it is
/// `public` and not `static`.
#[must_use]
pub fn resolve_method(
    world: &World,
    owner: ClassId,
    name: &str,
    descriptor: &MethodDescriptor,
    to_interface: bool,
) -> Option<MethodId> {
    if let Some(method) = direct_method(world, owner, name, descriptor) {
        return Some(method);
    }

    let mut class = world.class(owner).superclass();
    while let Some(current) = class {
        if let Some(method) = direct_method(world, current, name, descriptor) {
            let access = world.method(method).access_flags();
            let usable = !to_interface
                || (access.contains(MethodAccessFlags::PUBLIC) && !access.contains(MethodAccessFlags::STATIC));
            if usable {
                return Some(method);
            }
            break;
        }
        class = world.class(current).superclass();
    }

    resolve_interface_method(world, owner, name, descriptor)
}

fn direct_method(world: &World, owner: ClassId, name: &str, descriptor: &MethodDescriptor) -> Option<MethodId> {
    world.class(owner).methods().iter().copied().find(|&id| {
        let method = world.method(id);
        method.name() == name && method.descriptor() == descriptor
    })
}

/// The maximally-specific interface method resolution algorithm: collects every
/// non-private, non-static candidate reachable by BFS over super-interfaces,
/// prefers a non-abstract one if any exists, and otherwise requires a unique
/// survivor after discarding candidates whose owner is a super-interface of
/// another candidate's owner.
fn resolve_interface_method(
    world: &World,
    owner: ClassId,
    name: &str,
    descriptor: &MethodDescriptor,
) -> Option<MethodId> {
    let mut candidates = Vec::new();
    visit_super_interfaces(world, owner, &mut |iface| {
        if let Some(id) = direct_method(world, iface, name, descriptor) {
            let access = world.method(id).access_flags();
            if !access.contains(MethodAccessFlags::PRIVATE) && !access.contains(MethodAccessFlags::STATIC) {
                candidates.push(id);
            }
        }
    });

    if candidates.is_empty() {
        return None;
    }

    let non_abstract: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|&id| !world.method(id).access_flags().contains(MethodAccessFlags::ABSTRACT))
        .collect();
    if non_abstract.len() == 1 {
        return Some(non_abstract[0]);
    }
    if !non_abstract.is_empty() {
        candidates = non_abstract;
    }

    let survivors: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|&candidate| {
            let owner = world.method(candidate).owner();
            !candidates.iter().any(|&other| {
                other != candidate && is_super_interface_of(world, owner, world.method(other).owner())
            })
        })
        .collect();

    match survivors.as_slice() {
        [single] => Some(*single),
        _ => None,
    }
}

fn is_super_interface_of(world: &World, candidate: ClassId, of: ClassId) -> bool {
    let mut found = false;
    visit_super_interfaces(world, of, &mut |iface| {
        if iface == candidate {
            found = true;
        }
    });
    found
}

fn bfs_interfaces<T>(world: &World, start: ClassId, mut visit: impl FnMut(ClassId) -> Option<T>) -> Option<T> {
    let mut queue: VecDeque<ClassId> = world.class(start).interfaces().iter().copied().collect();
    let mut seen = std::collections::HashSet::new();
    while let Some(iface) = queue.pop_front() {
        if !seen.insert(iface) {
            continue;
        }
        if let Some(found) = visit(iface) {
            return Some(found);
        }
        queue.extend(world.class(iface).interfaces().iter().copied());
    }
    None
}

fn visit_super_interfaces(world: &World, start: ClassId, visit: &mut impl FnMut(ClassId)) {
    let mut queue: VecDeque<ClassId> = world.class(start).interfaces().iter().copied().collect();
    let mut seen = std::collections::HashSet::new();
    while let Some(iface) = queue.pop_front() {
        if !seen.insert(iface) {
            continue;
        }
        visit(iface);
        queue.extend(world.class(iface).interfaces().iter().copied());
    }
}
