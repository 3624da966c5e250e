//! The in-memory bytecode execution walker (§4.4): basic-block partitioning plus
//! a lockstep parallel executor used to validate candidate method pairs by
//! comparing their comparable instructions in program order.

mod block;
mod execution;

pub use block::{BasicBlock, BlockGraph};
pub use execution::{Execution, ParallelExecutor};

use crate::{
    code::{Instruction, MethodBody},
    compare::{Site, instructions_match},
};

/// The instruction kinds the comparator (§4.3) has an opinion about — the ones
/// the parallel executor should pause on (§4.4, "Usage in matching").
#[must_use]
pub fn is_comparable(insn: &Instruction) -> bool {
    insn.is_branch()
        || matches!(
            insn,
            Instruction::IConst(_)
                | Instruction::BiPush(_)
                | Instruction::SiPush(_)
                | Instruction::ILoad(_)
                | Instruction::LLoad(_)
                | Instruction::FLoad(_)
                | Instruction::DLoad(_)
                | Instruction::ALoad(_)
                | Instruction::IStore(_)
                | Instruction::LStore(_)
                | Instruction::FStore(_)
                | Instruction::DStore(_)
                | Instruction::AStore(_)
                | Instruction::IInc { .. }
                | Instruction::GetStatic(_)
                | Instruction::PutStatic(_)
                | Instruction::GetField(_)
                | Instruction::PutField(_)
                | Instruction::InvokeVirtual(_)
                | Instruction::InvokeSpecial(_)
                | Instruction::InvokeStatic(_)
                | Instruction::InvokeInterface(_)
                | Instruction::InvokeDynamic { .. }
                | Instruction::New(_)
                | Instruction::ANewArray(_)
                | Instruction::CheckCast(_)
                | Instruction::InstanceOf(_)
                | Instruction::MultiANewArray(_, _)
                | Instruction::Ldc(_)
        )
}

/// Walks two method bodies in lockstep, pausing on comparable instructions and
/// scoring how many of those pauses agree per the instruction comparator
/// (§4.3). Returns the fraction of compared instruction pairs that agreed,
/// or `1.0` for two bodies with nothing comparable (including two empty ones).
#[must_use]
pub fn compare_bodies(site_a: Site<'_>, body_a: &MethodBody, site_b: Site<'_>, body_b: &MethodBody) -> f64 {
    let graph_a = BlockGraph::build(body_a);
    let graph_b = BlockGraph::build(body_b);
    if graph_a.is_empty() != graph_b.is_empty() {
        return 0.0;
    }
    if graph_a.is_empty() {
        return 1.0;
    }

    let exec_a = Execution::new(&graph_a, body_a);
    let exec_b = Execution::new(&graph_b, body_b);
    let mut executor = ParallelExecutor::new(exec_a, exec_b);

    let mut compared = 0usize;
    let mut agreed = 0usize;
    executor.execute_parallel(is_comparable, |a, b| {
        let (Some(pc_a), Some(insn_a)) = (a.current_pc(), a.current_instruction()) else {
            return false;
        };
        let (Some(pc_b), Some(insn_b)) = (b.current_pc(), b.current_instruction()) else {
            return false;
        };
        compared += 1;
        let site_a = Site { pc: pc_a, ..site_a };
        let site_b = Site { pc: pc_b, ..site_b };
        if instructions_match(site_a, insn_a, site_b, insn_b) {
            agreed += 1;
        }
        true
    });

    if compared == 0 { 1.0 } else { agreed as f64 / compared as f64 }
}
