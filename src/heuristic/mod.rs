//! Heuristic sufficient-condition engine (spec §4.6-§4.10): tries to prove a
//! cyclically 4-edge-connected cubic graph's Frank number is 2 without
//! exhaustively enumerating orientations, by searching perfect matchings for
//! one whose 2-factor has the two-odd-cycle shape the proof needs.

pub mod consistency;
pub mod matching;
pub mod witness;

use crate::model::{DiGraph, EdgeNumbering, UndirectedGraph};

pub struct Outcome {
    /// `true` iff some perfect matching produced a valid configuration.
    /// This is a sufficient, not necessary, condition: `false` does not mean
    /// the graph's Frank number isn't 2, only that the heuristic couldn't
    /// prove it.
    pub succeeded: bool,
    pub witness: Option<(DiGraph, DiGraph)>,
}

/// Runs the heuristic to completion (or short-circuits on first success).
/// `double_check` requests the witness builder of §4.10; a configuration
/// that passes §4.7 but whose witness fails validation is an internal bug,
/// not a normal "no" — the caller surfaces `FrankError::WitnessInvariant`.
pub fn run(
    g: &UndirectedGraph,
    numbering: &EdgeNumbering,
    double_check: bool,
) -> Result<Outcome, WitnessFailure> {
    let mut witness = None;
    let mut witness_failed = false;

    let succeeded = matching::enumerate_perfect_matchings(g, &mut |f| {
        let Some(config) = config_test::test_configuration(g, f) else {
            return false;
        };
        if double_check {
            match witness::build_and_verify(g, numbering, &config) {
                Some(w) => {
                    witness = Some(w);
                    true
                }
                None => {
                    witness_failed = true;
                    true
                }
            }
        } else {
            true
        }
    });

    if witness_failed {
        return Err(WitnessFailure);
    }

    Ok(Outcome { succeeded, witness })
}

/// The heuristic's own proof obligation failed its double-check: the
/// configuration test found a matching it believed witnessed a Frank-2 pair,
/// but the concrete orientations built from it did not actually verify.
#[derive(Debug)]
pub struct WitnessFailure;
