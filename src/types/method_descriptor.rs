//! Non-generic JVM method descriptors.

use std::str::FromStr;

use itertools::Itertools;

use super::field_type::{FieldType, PrimitiveType};

/// The descriptor of a method. Consists of the parameter types and the return type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, derive_more::Display)]
#[display(
    "({}){return_type}",
    parameters_types.iter().map(FieldType::descriptor).join("")
)]
pub struct MethodDescriptor {
    /// The types of the parameters, in order.
    pub parameters_types: Vec<FieldType>,
    /// The return type.
    pub return_type: ReturnType,
}

/// Denotes the return type of a method.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, derive_more::Display, derive_more::From,
)]
pub enum ReturnType {
    /// The method returns a specific type.
    Some(FieldType),
    /// The return type of the method is `void`.
    #[display("void")]
    Void,
}

const PARAM_START: char = '(';
const PARAM_END: char = ')';
const ARRAY_MARKER: char = '[';
const OBJECT_MARKER: char = 'L';
const OBJECT_END: char = ';';

impl FromStr for MethodDescriptor {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let remaining = descriptor
            .strip_prefix(PARAM_START)
            .ok_or_else(|| InvalidDescriptor(descriptor.to_owned()))?;
        let (parameters_types, remaining) = parse_params(remaining)?;
        let return_type = ReturnType::from_str(remaining)
            .map_err(|_| InvalidDescriptor(descriptor.to_owned()))?;
        Ok(Self {
            parameters_types,
            return_type,
        })
    }
}

fn parse_params(mut remaining: &str) -> Result<(Vec<FieldType>, &str), InvalidDescriptor> {
    let mut parameters_types = Vec::new();
    loop {
        if let Some(remaining) = remaining.strip_prefix(PARAM_END) {
            return Ok((parameters_types, remaining));
        }
        let (dimension, after_dim) = parse_array_dimension(remaining)?;
        let (base_type, after_param) = parse_next_param(after_dim)?;
        let param_type = (0..dimension).fold(base_type, |acc, _| acc.make_array_type());
        parameters_types.push(param_type);
        remaining = after_param;
    }
}

fn parse_next_param(input: &str) -> Result<(FieldType, &str), InvalidDescriptor> {
    let (first_char, remaining) = input
        .chars()
        .next()
        .map(|c| (c, &input[c.len_utf8()..]))
        .ok_or_else(|| InvalidDescriptor(input.to_owned()))?;

    match first_char {
        primitive @ ('Z' | 'C' | 'F' | 'D' | 'B' | 'S' | 'I' | 'J') => {
            let param_type = PrimitiveType::try_from(primitive).map(FieldType::Base)?;
            Ok((param_type, remaining))
        }
        OBJECT_MARKER => {
            let (class_name, rest) = remaining
                .split_once(OBJECT_END)
                .ok_or_else(|| InvalidDescriptor(input.to_owned()))?;
            Ok((
                FieldType::Object(crate::model::ClassRef::new(class_name)),
                rest,
            ))
        }
        _ => Err(InvalidDescriptor(input.to_owned())),
    }
}

fn parse_array_dimension(input: &str) -> Result<(u8, &str), InvalidDescriptor> {
    let count = input.chars().take_while(|&c| c == ARRAY_MARKER).count();
    let remaining = &input[count..];
    let dimension = u8::try_from(count).map_err(|_| InvalidDescriptor(input.to_owned()))?;
    Ok((dimension, remaining))
}

/// An error indicating that a descriptor string is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid descriptor: {0}")]
pub struct InvalidDescriptor(pub String);

impl FromStr for ReturnType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        if descriptor == "V" {
            Ok(ReturnType::Void)
        } else {
            FieldType::from_str(descriptor).map(ReturnType::Some)
        }
    }
}

impl ReturnType {
    /// Returns the descriptor for the return type.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            ReturnType::Some(it) => it.descriptor(),
            ReturnType::Void => "V".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_desc() {
        assert!(MethodDescriptor::from_str("").is_err());
    }

    #[test]
    fn incomplete_return_type() {
        assert!(MethodDescriptor::from_str("()Ljava/lang").is_err());
    }

    #[test]
    fn missing_return_type() {
        assert!(MethodDescriptor::from_str("(I)").is_err());
    }

    #[test]
    fn missing_semicolon() {
        assert!(MethodDescriptor::from_str("(I[Ljava/lang/StringJ)V").is_err());
    }

    #[test]
    fn invalid_primitive() {
        assert!(MethodDescriptor::from_str("(V[Ljava/lang/String;J)V").is_err());
    }

    #[test]
    fn parses_no_arg_void() {
        let d = MethodDescriptor::from_str("()V").unwrap();
        assert!(d.parameters_types.is_empty());
        assert_eq!(d.return_type, ReturnType::Void);
    }

    #[test]
    fn parses_mixed_args() {
        let d = MethodDescriptor::from_str("(I[Ljava/lang/String;D)Z").unwrap();
        assert_eq!(d.parameters_types.len(), 3);
        assert_eq!(d.parameters_types[0], FieldType::Base(PrimitiveType::Int));
        assert_eq!(d.return_type, ReturnType::Some(FieldType::Base(PrimitiveType::Boolean)));
    }

    #[test]
    fn round_trips_through_display() {
        let d = MethodDescriptor::from_str("(I[Ljava/lang/String;D)Z").unwrap();
        assert_eq!(d.to_string(), "(I[Ljava/lang/String;D)Z");
    }
}
