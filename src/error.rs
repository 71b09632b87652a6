//! Error types for the fallible, non-hot-path operations of spec §7.
//!
//! Hot-path algorithmic code (DFS, the deletable-edge oracle, the
//! enumerator, the constraint search) cannot fail except via a violated
//! program invariant, so it returns plain values. Everything that can
//! legitimately fail on untrusted input — decoding a graph6 line, checking
//! it against the compiled bit width — goes through `FrankError`.

use core::fmt;

use error_stack::Context;

/// Error kinds from spec §7, minus kind 3 (allocation failure, handled by
/// the global allocator aborting) and kind 5 (usage errors, handled by
/// `clap` plus one explicit driver check, see `cli`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrankError {
    /// Kind 1: the input line is not a valid graph6 string.
    MalformedGraph6,
    /// Kind 2: the graph's order (or edge count) exceeds the compiled bit
    /// width.
    TooLarge,
    /// Kind 2 variant: the decoded graph is not cubic, so it is outside the
    /// domain this crate was built for (§1 non-goals).
    NotCubic,
    /// Kind 4: an invariant the proof depends on was violated — a bug in
    /// this program, not a property of the input. See DESIGN.md's
    /// resolution of open question (c).
    WitnessInvariant,
}

impl fmt::Display for FrankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGraph6 => f.write_str("malformed graph6 line"),
            Self::TooLarge => f.write_str("graph order exceeds the compiled bit width"),
            Self::NotCubic => f.write_str("graph is not 3-regular"),
            Self::WitnessInvariant => {
                f.write_str("internal invariant violated while building a witness orientation")
            }
        }
    }
}

impl Context for FrankError {}

pub type Result<T> = error_stack::Result<T, FrankError>;
