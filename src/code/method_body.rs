//! A decoded method body: the linear instruction sequence the comparator (§4.3)
//! and execution walker (§4.4) operate on.

use std::collections::BTreeMap;

use super::{Instruction, ProgramCounter};

/// The instructions of a method, keyed by program counter.
///
/// Kept as an ordered map rather than a dense `Vec` because program counters are
/// byte offsets with gaps (wide/multi-byte instructions), and the walker needs to
/// look an instruction up by exact target without re-deriving offsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodBody {
    instructions: BTreeMap<ProgramCounter, Instruction>,
}

impl MethodBody {
    /// Builds a method body from a decoded instruction stream.
    #[must_use]
    pub fn new(instructions: BTreeMap<ProgramCounter, Instruction>) -> Self {
        Self { instructions }
    }

    /// The number of instructions in this body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether this body has no instructions (e.g. an abstract or native method).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at a given program counter.
    #[must_use]
    pub fn get(&self, pc: ProgramCounter) -> Option<&Instruction> {
        self.instructions.get(&pc)
    }

    /// The entry point of this body, if it has any instructions.
    #[must_use]
    pub fn entry_point(&self) -> Option<ProgramCounter> {
        self.instructions.keys().next().copied()
    }

    /// The program counter immediately following `pc`'s instruction, i.e. the
    /// fallthrough target, if `pc` is not the last instruction.
    #[must_use]
    pub fn next_pc(&self, pc: ProgramCounter) -> Option<ProgramCounter> {
        self.instructions
            .range((std::ops::Bound::Excluded(pc), std::ops::Bound::Unbounded))
            .next()
            .map(|(&next, _)| next)
    }

    /// Iterates the body in program-counter order.
    pub fn iter(&self) -> impl Iterator<Item = (ProgramCounter, &Instruction)> {
        self.instructions.iter().map(|(&pc, insn)| (pc, insn))
    }

    /// The program counters that are jump targets of some instruction in this body,
    /// i.e. the leaders of every basic block but the entry block (§4.4).
    #[must_use]
    pub fn branch_targets(&self) -> Vec<ProgramCounter> {
        let mut targets: Vec<_> = self
            .instructions
            .values()
            .flat_map(Instruction::jump_targets)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }
}

impl<'a> IntoIterator for &'a MethodBody {
    type Item = (ProgramCounter, &'a Instruction);
    type IntoIter = Box<dyn Iterator<Item = (ProgramCounter, &'a Instruction)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
