//! The single-method execution walker and the lockstep parallel executor (§4.4).

use std::collections::{HashMap, HashSet};

use crate::code::{Instruction, MethodBody, ProgramCounter};

use super::block::BlockGraph;

/// Walks one method's basic-block graph instruction by instruction, in the
/// deterministic order defined by the step rule (§4.4).
#[derive(Debug)]
pub struct Execution<'g> {
    graph: &'g BlockGraph,
    body: &'g MethodBody,
    current_block: usize,
    current_index: usize,
    terminated: bool,
    paused: bool,
    return_stack: Vec<(usize, usize)>,
    visited_branches: HashSet<usize>,
    trunk_of: HashMap<usize, usize>,
    visited_trunks: HashSet<usize>,
}

impl<'g> Execution<'g> {
    /// Starts a fresh walk at the method's entry block.
    #[must_use]
    pub fn new(graph: &'g BlockGraph, body: &'g MethodBody) -> Self {
        Self {
            graph,
            body,
            current_block: 0,
            current_index: 0,
            terminated: graph.is_empty(),
            paused: false,
            return_stack: Vec::new(),
            visited_branches: HashSet::new(),
            trunk_of: HashMap::new(),
            visited_trunks: HashSet::new(),
        }
    }

    /// The program counter this execution is currently sitting on, if not terminated.
    #[must_use]
    pub fn current_pc(&self) -> Option<ProgramCounter> {
        if self.terminated {
            return None;
        }
        self.graph.block(self.current_block).instructions.get(self.current_index).copied()
    }

    /// The instruction this execution is currently sitting on, if not terminated.
    #[must_use]
    pub fn current_instruction(&self) -> Option<&'g Instruction> {
        self.current_pc().and_then(|pc| self.body.get(pc))
    }

    /// Whether this walk has run out of reachable, unvisited blocks.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether this walk is paused, awaiting [`Self::unpause`].
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Resumes a paused walk.
    pub fn unpause(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    /// Advances the walk by one instruction, applying the step rule at block
    /// boundaries. A no-op if terminated or paused.
    pub fn step(&mut self) {
        if self.terminated || self.paused {
            return;
        }
        let block = self.graph.block(self.current_block);
        if self.current_index + 1 < block.instructions.len() {
            self.current_index += 1;
            return;
        }
        self.advance_block();
    }

    fn advance_block(&mut self) {
        let block = self.graph.block(self.current_block);

        // 1. First unvisited branch.
        if let Some(&dest) = block.branches.iter().find(|&&d| !self.visited_branches.contains(&d)) {
            self.visited_branches.insert(dest);
            self.trunk_of.insert(dest, self.current_block);
            self.enter(dest);
            return;
        }
        // 2. Fallthrough.
        if let Some(next) = block.next {
            self.enter(next);
            return;
        }
        // 3. Step-out via the return stack.
        if let Some((ret_block, ret_index)) = self.return_stack.pop() {
            self.current_block = ret_block;
            self.current_index = ret_index;
            return;
        }
        // 4. The origin's trunk, if unvisited.
        let origin = block.origin;
        if let Some(&trunk) = self.trunk_of.get(&origin) {
            if self.visited_trunks.insert(trunk) {
                self.enter(trunk);
                return;
            }
        }
        // 5. Terminate.
        self.terminated = true;
    }

    fn enter(&mut self, block: usize) {
        self.current_block = block;
        self.current_index = 0;
    }

    /// Speculatively pushes a step-out return point and jumps to `target_block`,
    /// simulating stepping into a statically-resolved `INVOKESTATIC` callee.
    /// Only reachable behind the `unstable-walker-inlining` feature (§4.4, §9).
    #[cfg(feature = "unstable-walker-inlining")]
    pub fn step_into(&mut self, target_block: usize) {
        self.return_stack.push((self.current_block, self.current_index));
        self.enter(target_block);
    }
}

/// Advances two [`Execution`]s in lockstep, pausing each at instructions the
/// caller marks comparable and invoking a consumer once both are paused (§4.4).
#[derive(Debug)]
pub struct ParallelExecutor<'g> {
    a: Execution<'g>,
    b: Execution<'g>,
}

impl<'g> ParallelExecutor<'g> {
    /// Pairs up two walks to drive together.
    #[must_use]
    pub fn new(a: Execution<'g>, b: Execution<'g>) -> Self {
        Self { a, b }
    }

    /// Runs until either execution terminates or `consumer` returns `false`.
    /// `pause_at` decides which instructions are comparable and thus worth
    /// pausing on; `consumer` is invoked only once both walks are paused, and
    /// must return whether the comparison should continue.
    pub fn execute_parallel(
        &mut self,
        pause_at: impl Fn(&Instruction) -> bool,
        mut consumer: impl FnMut(&Execution<'g>, &Execution<'g>) -> bool,
    ) {
        loop {
            if self.a.is_terminated() || self.b.is_terminated() {
                return;
            }
            if !self.a.is_paused() {
                if let Some(insn) = self.a.current_instruction() {
                    if pause_at(insn) {
                        self.a.pause();
                    }
                }
            }
            if !self.b.is_paused() {
                if let Some(insn) = self.b.current_instruction() {
                    if pause_at(insn) {
                        self.b.pause();
                    }
                }
            }
            if self.a.is_paused() && self.b.is_paused() {
                let keep_going = consumer(&self.a, &self.b);
                self.a.unpause();
                self.b.unpause();
                if !keep_going {
                    return;
                }
                self.a.step();
                self.b.step();
                continue;
            }
            if !self.a.is_paused() {
                self.a.step();
            }
            if !self.b.is_paused() {
                self.b.step();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn linear_body() -> MethodBody {
        let mut map = BTreeMap::new();
        map.insert(ProgramCounter::from(0), Instruction::IConst(1));
        map.insert(ProgramCounter::from(1), Instruction::IConst(2));
        map.insert(ProgramCounter::from(2), Instruction::Return);
        MethodBody::new(map)
    }

    #[test]
    fn walks_a_linear_body_to_termination() {
        let body = linear_body();
        let graph = BlockGraph::build(&body);
        let mut exec = Execution::new(&graph, &body);
        let mut visited = Vec::new();
        while !exec.is_terminated() {
            visited.push(exec.current_pc().unwrap());
            exec.step();
        }
        assert_eq!(visited, vec![ProgramCounter::from(0), ProgramCounter::from(1), ProgramCounter::from(2)]);
    }

    #[test]
    fn parallel_executor_pauses_both_and_compares() {
        let body = linear_body();
        let graph = BlockGraph::build(&body);
        let exec_a = Execution::new(&graph, &body);
        let exec_b = Execution::new(&graph, &body);
        let mut executor = ParallelExecutor::new(exec_a, exec_b);
        let mut pauses = 0;
        executor.execute_parallel(
            |insn| matches!(insn, Instruction::IConst(_)),
            |a, b| {
                pauses += 1;
                a.current_instruction() == b.current_instruction()
            },
        );
        assert_eq!(pauses, 2);
    }
}
