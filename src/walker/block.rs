//! Basic block partitioning of a method body (§4.4).

use std::collections::BTreeSet;

use crate::code::{MethodBody, ProgramCounter};

/// A straight-line run of instructions bounded by branch targets and branch-source
/// instructions.
#[derive(Debug, Clone)]
pub struct BasicBlock {
    /// This block's instructions, in program order.
    pub instructions: Vec<ProgramCounter>,
    /// The fallthrough successor, if control can reach past this block's last
    /// instruction without taking a branch.
    pub next: Option<usize>,
    /// Non-fallthrough successors (jump/switch targets of this block's last instruction).
    pub branches: Vec<usize>,
    /// Predecessor blocks, populated once the whole graph is built.
    pub prev: Vec<usize>,
    /// The earliest `prev`-ancestor of this block, used by the step rule to find
    /// an unvisited trunk to fall back to when a walk runs out of branches.
    pub origin: usize,
}

impl BasicBlock {
    /// This block's first instruction.
    #[must_use]
    pub fn start(&self) -> ProgramCounter {
        self.instructions[0]
    }

    /// This block's last instruction.
    #[must_use]
    pub fn end(&self) -> ProgramCounter {
        *self.instructions.last().expect("a basic block always has at least one instruction")
    }
}

/// The basic-block decomposition of a single method body.
#[derive(Debug, Clone)]
pub struct BlockGraph {
    blocks: Vec<BasicBlock>,
}

impl BlockGraph {
    /// Partitions `body` into basic blocks.
    #[must_use]
    pub fn build(body: &MethodBody) -> Self {
        let Some(entry) = body.entry_point() else {
            return Self { blocks: Vec::new() };
        };

        let mut leaders: BTreeSet<ProgramCounter> = BTreeSet::new();
        leaders.insert(entry);
        for (pc, insn) in body.iter() {
            for target in insn.jump_targets() {
                leaders.insert(target);
            }
            if insn.is_branch() || insn.is_unconditional_transfer() {
                if let Some(after) = body.next_pc(pc) {
                    leaders.insert(after);
                }
            }
        }
        let leaders: Vec<ProgramCounter> = leaders.into_iter().collect();

        let mut blocks: Vec<BasicBlock> = leaders
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end_bound = leaders.get(i + 1).copied();
                let mut instructions = Vec::new();
                let mut pc = start;
                loop {
                    instructions.push(pc);
                    match body.next_pc(pc) {
                        Some(next) if Some(next) != end_bound => pc = next,
                        _ => break,
                    }
                }
                BasicBlock {
                    instructions,
                    next: None,
                    branches: Vec::new(),
                    prev: Vec::new(),
                    origin: 0,
                }
            })
            .collect();

        let index_of = |pc: ProgramCounter| leaders.partition_point(|&l| l <= pc).saturating_sub(1);

        for i in 0..blocks.len() {
            let last_pc = blocks[i].end();
            let last_insn = body.get(last_pc).expect("block end is a real instruction");
            let targets = last_insn.jump_targets();
            for target in &targets {
                let dest = index_of(*target);
                blocks[i].branches.push(dest);
            }
            if !last_insn.is_unconditional_transfer() {
                if let Some(fallthrough) = body.next_pc(last_pc) {
                    blocks[i].next = Some(index_of(fallthrough));
                }
            }
        }

        let edges: Vec<(usize, usize)> = blocks
            .iter()
            .enumerate()
            .flat_map(|(i, b)| b.next.into_iter().chain(b.branches.iter().copied()).map(move |j| (i, j)))
            .collect();
        for (from, to) in edges {
            blocks[to].prev.push(from);
        }

        for i in 0..blocks.len() {
            let mut origin = i;
            let mut seen = BTreeSet::new();
            while let Some(&parent) = blocks[origin].prev.first() {
                if !seen.insert(origin) {
                    break;
                }
                origin = parent;
            }
            blocks[i].origin = origin;
        }

        Self { blocks }
    }

    /// The block at `index`.
    #[must_use]
    pub fn block(&self, index: usize) -> &BasicBlock {
        &self.blocks[index]
    }

    /// The number of blocks in this graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether this graph has no blocks (an abstract/native method).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The index of the entry block (always `0` for a non-empty graph).
    #[must_use]
    pub fn entry_index(&self) -> usize {
        0
    }
}
