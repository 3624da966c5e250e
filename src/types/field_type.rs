//! JVM non-generic type system.
use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use super::InvalidDescriptor;
use crate::model::ClassRef;

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    Boolean,
    /// The `char` type.
    Char,
    /// The `float` type.
    Float,
    /// The `double` type.
    Double,
    /// The `byte` type.
    Byte,
    /// The `short` type.
    Short,
    /// The `int` type.
    Int,
    /// The `long` type.
    Long,
}

impl PrimitiveType {
    fn descriptor_str(self) -> &'static str {
        match self {
            Self::Boolean => "Z",
            Self::Char => "C",
            Self::Float => "F",
            Self::Double => "D",
            Self::Byte => "B",
            Self::Short => "S",
            Self::Int => "I",
            Self::Long => "J",
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::Char => write!(f, "char"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Byte => write!(f, "byte"),
            Self::Short => write!(f, "short"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            unexpected => Err(InvalidDescriptor(unexpected.to_string())),
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let mut chars = descriptor.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InvalidDescriptor(descriptor.to_owned())),
        }
    }
}

/// A field type (non-generic) in Java.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A reference type (except arrays).
    Object(ClassRef),
    /// An array type.
    Array(Box<FieldType>),
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(it) => it.fmt(f),
            Self::Object(it) => it.fmt(f),
            Self::Array(it) => write!(f, "{it}[]"),
        }
    }
}

impl FromStr for FieldType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let mut chars = descriptor.chars();
        match chars.next() {
            Some('[') => Self::from_str(chars.as_str())
                .map(|it| it.make_array_type())
                .map_err(|_| InvalidDescriptor(descriptor.to_owned())),
            Some('L') => {
                let type_name = chars.take_while_ref(|it| it != &';').collect::<String>();
                match (chars.next(), chars.next()) {
                    (Some(';'), None) => Ok(Self::Object(ClassRef::new(type_name))),
                    _ => Err(InvalidDescriptor(descriptor.to_owned())),
                }
            }
            Some(c) => match chars.next() {
                None => PrimitiveType::try_from(c).map(Self::Base),
                _ => Err(InvalidDescriptor(descriptor.to_owned())),
            },
            None => Err(InvalidDescriptor(descriptor.to_owned())),
        }
    }
}

impl FieldType {
    /// Creates an array type with the given type as its elements.
    #[must_use]
    pub fn make_array_type(&self) -> Self {
        Self::Array(Box::new(self.clone()))
    }

    /// Returns the binary descriptor string for this type (e.g. `Ljava/lang/Object;`).
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            FieldType::Base(it) => it.descriptor_str().to_owned(),
            FieldType::Object(ClassRef { binary_name }) => {
                format!("L{binary_name};")
            }
            FieldType::Array(inner) => format!("[{}", inner.descriptor()),
        }
    }

    /// Returns the class this type refers to, if it is an object or array-of-object type.
    #[must_use]
    pub fn class_ref(&self) -> Option<&ClassRef> {
        match self {
            FieldType::Object(class_ref) => Some(class_ref),
            FieldType::Array(inner) => inner.class_ref(),
            FieldType::Base(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_class_name() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_/]{0,20}"
    }

    fn arb_primitive_type_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Z".to_owned()),
            Just("C".to_owned()),
            Just("F".to_owned()),
            Just("D".to_owned()),
            Just("B".to_owned()),
            Just("S".to_owned()),
            Just("I".to_owned()),
            Just("J".to_owned()),
        ]
    }

    fn arb_field_type() -> impl Strategy<Value = FieldType> {
        let leaf = prop_oneof![
            any::<PrimitiveType>().prop_map(FieldType::Base),
            arb_class_name().prop_map(|n| FieldType::Object(ClassRef::new(n))),
        ];
        leaf.prop_recursive(4, 8, 2, |inner| {
            inner.prop_map(|it| it.make_array_type())
        })
    }

    #[test]
    fn primitive_type_descriptor_str() {
        assert_eq!(PrimitiveType::Boolean.descriptor_str(), "Z");
        assert_eq!(PrimitiveType::Long.descriptor_str(), "J");
    }

    #[test]
    fn primitive_type_display() {
        assert_eq!(PrimitiveType::Boolean.to_string(), "boolean");
        assert_eq!(PrimitiveType::Int.to_string(), "int");
    }

    proptest! {
        #[test]
        fn should_reject_invalid_primitive_type_char(
            c in r"[^ZCFDBSIJ]".prop_map(|it| it.chars().next().unwrap())
        ) {
            assert!(PrimitiveType::try_from(c).is_err());
        }
    }

    #[test]
    fn field_type_display() {
        assert_eq!(
            FieldType::Base(PrimitiveType::Boolean).to_string(),
            "boolean"
        );
        assert_eq!(
            FieldType::Object(ClassRef::new("java/lang/Object")).to_string(),
            "java/lang/Object"
        );
        assert_eq!(
            FieldType::Base(PrimitiveType::Int)
                .make_array_type()
                .to_string(),
            "int[]"
        );
    }

    proptest! {
        #[test]
        fn field_type_from_str_class(class_name in arb_class_name()) {
            let s = format!("L{class_name};");
            let expected = FieldType::Object(ClassRef::new(class_name));
            assert_eq!(FieldType::from_str(&s), Ok(expected));
        }

        #[test]
        fn field_type_from_str_array(
            base_type in prop_oneof![
                arb_primitive_type_name(),
                arb_class_name().prop_map(|it| format!("L{it};"))
            ],
            dimension in 1..=8u8,
        ) {
            let s = format!("{}{}", "[".repeat(usize::from(dimension)), base_type);
            let base_type = FieldType::from_str(&base_type).expect("failed to parse base type");
            let mut parsed = FieldType::from_str(&s).expect("failed to parse field type");
            for _ in 0..dimension {
                if let FieldType::Array(element_type) = parsed {
                    parsed = *element_type;
                } else {
                    panic!("expected array type, got: {parsed:?}");
                }
            }
            assert_eq!(parsed, base_type);
        }

        #[test]
        fn field_type_round_trips(field_type in arb_field_type()) {
            let descriptor = field_type.descriptor();
            assert_eq!(FieldType::from_str(&descriptor), Ok(field_type));
        }
    }

    #[test]
    fn field_type_from_str_primitive() {
        assert_eq!(
            FieldType::from_str("Z"),
            Ok(FieldType::Base(PrimitiveType::Boolean))
        );
        assert_eq!(
            FieldType::from_str("J"),
            Ok(FieldType::Base(PrimitiveType::Long))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(FieldType::from_str("").is_err());
        assert!(FieldType::from_str("Q").is_err());
        assert!(FieldType::from_str("Ljava/lang/Object").is_err());
    }
}
