use std::fmt::Display;

/// A program counter: the byte offset of an instruction within a method body.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
#[repr(transparent)]
pub struct ProgramCounter(u32);

impl ProgramCounter {
    /// The entry point of a method.
    pub const ZERO: Self = Self(0);

    /// Creates a program counter offset from this one.
    /// # Errors
    /// Returns [`InvalidOffset`] if the result would be negative.
    pub fn offset(self, offset: i32) -> Result<Self, InvalidOffset> {
        let result = i64::from(self.0) + i64::from(offset);
        u32::try_from(result)
            .map(Self)
            .map_err(|_| InvalidOffset(offset))
    }

    /// Checks whether this program counter is the entry point of a method.
    #[must_use]
    pub const fn is_entry_point(self) -> bool {
        self.0 == 0
    }

    /// The sign of the jump this program counter represents relative to another:
    /// used by the instruction comparator (§4.3) to compare jump direction without
    /// comparing exact targets.
    #[must_use]
    pub fn direction_from(self, current: Self) -> JumpDirection {
        match self.0.cmp(&current.0) {
            std::cmp::Ordering::Greater => JumpDirection::Forward,
            std::cmp::Ordering::Less => JumpDirection::Backward,
            std::cmp::Ordering::Equal => JumpDirection::SelfLoop,
        }
    }
}

/// The direction of a jump instruction relative to its own location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDirection {
    /// The jump target is after the jump instruction.
    Forward,
    /// The jump target is before the jump instruction.
    Backward,
    /// The jump target is the jump instruction itself.
    SelfLoop,
}

impl Display for ProgramCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:05}", self.0)
    }
}

impl From<u32> for ProgramCounter {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ProgramCounter> for u32 {
    fn from(val: ProgramCounter) -> Self {
        val.0
    }
}

/// An error raised when offsetting a [`ProgramCounter`] would underflow.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid jump offset {0}")]
pub struct InvalidOffset(pub i32);
