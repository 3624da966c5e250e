//! Direct coverage of the opcode-family comparator, bypassing the matcher
//! pipeline so branch and switch operand rules can be checked in isolation.

use jvm_matcher::code::{Instruction, ProgramCounter};
use jvm_matcher::compare::{Site, instructions_match};
use jvm_matcher::model::{Class, ClassAccessFlags, ClassId, Side, World};
use std::collections::BTreeMap;

fn site(world: &World, owner: ClassId, side: Side, pc: u32) -> Site<'_> {
    Site {
        world,
        owner,
        side,
        pc: ProgramCounter::from(pc),
    }
}

#[test]
fn backward_branch_never_matches_a_forward_one_even_at_the_same_offset() {
    let mut world = World::new();
    let c = world.push_class(|id| Class::new(id, Side::A, "A".to_owned(), ClassAccessFlags::PUBLIC));
    let sa = site(&world, c, Side::A, 50);
    let sb = site(&world, c, Side::B, 50);

    // Same raw target on both sides, but A's ifeq is a loop-back (backward)
    // while B's is a forward skip — direction, not offset, is what matters.
    let backward = Instruction::IfEq(ProgramCounter::from(10));
    let forward = Instruction::IfEq(ProgramCounter::from(90));

    assert!(!instructions_match(sa, &backward, sb, &forward));
    assert!(instructions_match(sa, &backward, sb, &backward));
}

#[test]
fn table_switch_compares_range_bounds_not_jump_targets() {
    let mut world = World::new();
    let c = world.push_class(|id| Class::new(id, Side::A, "A".to_owned(), ClassAccessFlags::PUBLIC));
    let sa = site(&world, c, Side::A, 0);
    let sb = site(&world, c, Side::B, 0);

    let a = Instruction::TableSwitch {
        range: 0..=3,
        jump_targets: vec![10.into(), 20.into(), 30.into(), 40.into()],
        default: 50.into(),
    };
    // Relocated targets (obfuscated body layout), identical range: still a match.
    let b_same_range = Instruction::TableSwitch {
        range: 0..=3,
        jump_targets: vec![1000.into(), 2000.into(), 3000.into(), 4000.into()],
        default: 5000.into(),
    };
    assert!(instructions_match(sa, &a, sb, &b_same_range));

    let b_different_range = Instruction::TableSwitch {
        range: 0..=4,
        jump_targets: vec![10.into(), 20.into(), 30.into(), 40.into(), 45.into()],
        default: 50.into(),
    };
    assert!(!instructions_match(sa, &a, sb, &b_different_range));
}

#[test]
fn lookup_switch_compares_key_set_not_targets() {
    let mut world = World::new();
    let c = world.push_class(|id| Class::new(id, Side::A, "A".to_owned(), ClassAccessFlags::PUBLIC));
    let sa = site(&world, c, Side::A, 0);
    let sb = site(&world, c, Side::B, 0);

    let mut keys_a = BTreeMap::new();
    keys_a.insert(1, ProgramCounter::from(10));
    keys_a.insert(7, ProgramCounter::from(20));
    let a = Instruction::LookupSwitch {
        default: 30.into(),
        match_targets: keys_a,
    };

    let mut keys_b_same = BTreeMap::new();
    keys_b_same.insert(1, ProgramCounter::from(900));
    keys_b_same.insert(7, ProgramCounter::from(901));
    let b_same_keys = Instruction::LookupSwitch {
        default: 902.into(),
        match_targets: keys_b_same,
    };
    assert!(instructions_match(sa, &a, sb, &b_same_keys));

    let mut keys_b_different = BTreeMap::new();
    keys_b_different.insert(1, ProgramCounter::from(10));
    keys_b_different.insert(8, ProgramCounter::from(20));
    let b_different_keys = Instruction::LookupSwitch {
        default: 30.into(),
        match_targets: keys_b_different,
    };
    assert!(!instructions_match(sa, &a, sb, &b_different_keys));
}

#[test]
fn table_switch_never_matches_a_lookup_switch() {
    let mut world = World::new();
    let c = world.push_class(|id| Class::new(id, Side::A, "A".to_owned(), ClassAccessFlags::PUBLIC));
    let sa = site(&world, c, Side::A, 0);

    let table = Instruction::TableSwitch {
        range: 0..=1,
        jump_targets: vec![10.into(), 20.into()],
        default: 30.into(),
    };
    let mut keys = BTreeMap::new();
    keys.insert(0, ProgramCounter::from(10));
    keys.insert(1, ProgramCounter::from(20));
    let lookup = Instruction::LookupSwitch {
        default: 30.into(),
        match_targets: keys,
    };

    assert!(!instructions_match(sa, &table, sa, &lookup));
}
