//! Operand resolution, potential-equality predicates, and the bytecode
//! instruction comparator (§4.1, §4.3, §4.5).

mod instruction_cmp;
mod potential_eq;
mod resolve;

pub use instruction_cmp::{Site, instructions_match};
pub use potential_eq::{classes_potentially_equal, fields_potentially_equal, methods_potentially_equal, types_potentially_equal};
pub use resolve::{resolve_field, resolve_method};
