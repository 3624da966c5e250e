//! Bytecode representation: program counters, instructions, and method bodies.

mod instruction;
mod method_body;
mod pc;

pub use instruction::{BootstrapMethod, ConstantValue, Instruction, MethodHandle, is_lambda_metafactory};
pub use method_body::MethodBody;
pub use pc::{InvalidOffset, JumpDirection, ProgramCounter};
