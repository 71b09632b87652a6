//! CLI argument parsing (spec §3a, §4.12, §6), grounded on the teacher's
//! `clap::App`/`Arg` construction style in `src/main.rs` (the `Paths`
//! binary), adapted from subcommand-based dispatch to this crate's flatter
//! flag set.

use clap::{crate_version, App, Arg, ArgMatches};

use crate::exact::Shard;

/// Whether `heuristic::run`/`exact::decide` should be invoked, and with what
/// policy, for each input graph (spec §3a).
#[derive(Debug, Clone, Copy)]
pub enum Engine {
    /// `-2`: heuristic only; a negative result is reported as-is (it does
    /// not fall back to the exact engine).
    HeuristicOnly,
    /// `-e`: exact engine only, skipping the heuristic.
    ExactOnly,
    /// Default: try the heuristic first, fall back to the exact engine.
    HeuristicThenExact,
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub engine: Engine,
    pub brute_force: bool,
    pub complement: bool,
    pub double_check: bool,
    pub print_orientations: bool,
    pub verbose: bool,
    pub per_graph_shard: Option<Shard>,
    pub single_graph_shard: Option<Shard>,
}

pub fn build_app() -> App<'static, 'static> {
    App::new("frank2")
        .version(crate_version!())
        .about("Decides whether a 3-edge-connected cubic graph's Frank number equals 2")
        .arg(Arg::with_name("heuristic-only").short("2").help("Use only the heuristic sufficient condition"))
        .arg(Arg::with_name("brute-force").short("b").help("Use the brute-force comparator instead of the constraint search"))
        .arg(Arg::with_name("complement").short("c").help("Output graphs whose Frank number IS 2 instead of is-not"))
        .arg(Arg::with_name("double-check").short("d").help("Validate heuristic successes with the witness builder"))
        .arg(Arg::with_name("exact-only").short("e").help("Force the exact engine, skipping the heuristic"))
        .arg(Arg::with_name("print-orientations").short("p").help("Write witness orientations to standard error"))
        .arg(Arg::with_name("single-graph-shard").short("s").takes_value(true).value_name("R/M").help("Process only orientation-counter residue R of M for the (one) input graph"))
        .arg(Arg::with_name("verbose").short("v").help("Print per-graph and summary statistics"))
        .arg(Arg::with_name("shard").value_name("R/M").index(1).help("Process only input graphs at index i with i mod M == R"))
}

/// Parses a `R/M` shard specifier, validating `0 <= R < M` (spec §6, error
/// kind 5).
pub fn parse_shard(spec: &str) -> Result<Shard, String> {
    let (r_str, m_str) = spec
        .split_once('/')
        .ok_or_else(|| format!("shard specifier '{spec}' is not of the form R/M"))?;
    let r: u64 = r_str.parse().map_err(|_| format!("'{r_str}' is not a valid shard index"))?;
    let m: u64 = m_str.parse().map_err(|_| format!("'{m_str}' is not a valid shard count"))?;
    if m == 0 || r >= m {
        return Err(format!("shard specifier '{spec}' must satisfy 0 <= R < M with M > 0"));
    }
    Ok(Shard { r, m })
}

pub fn parse_options(matches: &ArgMatches) -> Result<RunOptions, String> {
    let engine = match (matches.is_present("heuristic-only"), matches.is_present("exact-only")) {
        (true, true) => return Err("-2 and -e are mutually exclusive".to_string()),
        (true, false) => Engine::HeuristicOnly,
        (false, true) => Engine::ExactOnly,
        (false, false) => Engine::HeuristicThenExact,
    };

    let per_graph_shard = matches.value_of("shard").map(parse_shard).transpose()?;
    let single_graph_shard = matches.value_of("single-graph-shard").map(parse_shard).transpose()?;

    Ok(RunOptions {
        engine,
        brute_force: matches.is_present("brute-force"),
        complement: matches.is_present("complement"),
        double_check: matches.is_present("double-check"),
        print_orientations: matches.is_present("print-orientations"),
        verbose: matches.is_present("verbose"),
        per_graph_shard,
        single_graph_shard,
    })
}
