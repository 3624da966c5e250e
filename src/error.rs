//! The error taxonomy (§7): engine-fatal conditions, as distinct from routine
//! non-matches, which are represented in-band as `Option::None` and never
//! surface here.

/// Fatal conditions that abort a matching run.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The parser collaborator violated one of its input-integrity invariants
    /// (a dangling reference, a class missing for a referenced owner). The
    /// engine trusts these invariants and asserts rather than recovers; this
    /// variant exists for the `debug_assert!`-guarded constructors that let
    /// release builds degrade to a best-effort skip instead of panicking
    /// mid-pass.
    #[error("input integrity violation: {0}")]
    InputIntegrity(String),
    /// A worker task in the bounded pool (§5) panicked; the orchestrator
    /// cancels the remaining tasks of that pass and surfaces this diagnostic.
    #[error("worker panicked during {pass} pass on {symbol}: {payload}")]
    WorkerPanic {
        /// The pass kind that was in flight (`"class"`, `"method"`, `"field"`).
        pass: &'static str,
        /// A display-string identifying the source symbol being ranked.
        symbol: String,
        /// The panic payload, downgraded to a string since panic payloads are
        /// not generally `Send + Sync + 'static` themselves.
        payload: String,
    },
}

impl MatchError {
    /// Builds an [`MatchError::InputIntegrity`] error, panicking instead in
    /// debug/test builds so parser contract violations are caught early
    /// rather than silently skipped.
    #[must_use]
    pub fn input_integrity(reference: impl std::fmt::Display) -> Self {
        let message = reference.to_string();
        debug_assert!(false, "input integrity violation: {message}");
        Self::InputIntegrity(message)
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<MatchError>();
};
