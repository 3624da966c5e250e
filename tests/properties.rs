//! Property-based coverage of the few pieces of the engine with a clean
//! algebraic contract: bit-mask similarity is symmetric, the obfuscated-name
//! predicate has a sharp length boundary, and descriptors round-trip through
//! their own textual form.

use std::str::FromStr;

use proptest::prelude::*;

use jvm_matcher::classifier::bit_similarity;
use jvm_matcher::model::{ClassRef, is_obfuscated_name};
use jvm_matcher::types::{FieldType, MethodDescriptor, PrimitiveType, ReturnType};

fn arb_primitive_type() -> impl Strategy<Value = PrimitiveType> {
    prop_oneof![
        Just(PrimitiveType::Boolean),
        Just(PrimitiveType::Char),
        Just(PrimitiveType::Float),
        Just(PrimitiveType::Double),
        Just(PrimitiveType::Byte),
        Just(PrimitiveType::Short),
        Just(PrimitiveType::Int),
        Just(PrimitiveType::Long),
    ]
}

fn arb_class_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_/]{0,20}"
}

fn arb_field_type() -> impl Strategy<Value = FieldType> {
    let leaf = prop_oneof![
        arb_primitive_type().prop_map(FieldType::Base),
        arb_class_name().prop_map(|n| FieldType::Object(ClassRef::new(n))),
    ];
    leaf.prop_recursive(4, 8, 2, |inner| inner.prop_map(|t| t.make_array_type()))
}

fn arb_return_type() -> impl Strategy<Value = ReturnType> {
    prop_oneof![Just(ReturnType::Void), arb_field_type().prop_map(ReturnType::Some)]
}

fn arb_method_descriptor() -> impl Strategy<Value = MethodDescriptor> {
    (prop::collection::vec(arb_field_type(), 0..6), arb_return_type())
        .prop_map(|(parameters_types, return_type)| MethodDescriptor { parameters_types, return_type })
}

proptest! {
    #[test]
    fn bit_similarity_is_symmetric(a in any::<u16>(), b in any::<u16>(), mask in any::<u16>()) {
        assert_eq!(bit_similarity(a, b, mask), bit_similarity(b, a, mask));
    }

    #[test]
    fn bit_similarity_of_a_value_with_itself_is_one(a in any::<u16>(), mask in any::<u16>()) {
        assert_eq!(bit_similarity(a, a, mask), 1.0);
    }

    #[test]
    fn bit_similarity_stays_in_unit_range(a in any::<u16>(), b in any::<u16>(), mask in any::<u16>()) {
        let score = bit_similarity(a, b, mask);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn obfuscated_name_boundary_is_exactly_two_chars_or_aa_prefixed_three(
        name in "[a-zA-Z]{0,6}"
    ) {
        let expected = match name.len() {
            0..=2 => true,
            3 => name.starts_with("aa"),
            _ => name.starts_with("class") || name.starts_with("method") || name.starts_with("field"),
        };
        assert_eq!(is_obfuscated_name(&name), expected);
    }

    #[test]
    fn obfuscated_name_recognizes_deobfuscator_placeholder_prefixes(
        prefix in prop_oneof![Just("class"), Just("method"), Just("field")],
        suffix in "[0-9]{0,4}"
    ) {
        let name = format!("{prefix}{suffix}");
        assert!(is_obfuscated_name(&name));
    }

    #[test]
    fn method_descriptor_round_trips_through_display(descriptor in arb_method_descriptor()) {
        let text = descriptor.to_string();
        assert_eq!(MethodDescriptor::from_str(&text), Ok(descriptor));
    }
}
