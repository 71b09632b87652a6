//! `frank2` binary entry point: wires `clap` argument parsing to
//! `driver::run` over standard input/output, matching the teacher's
//! `env_logger::init_from_env` + `clap` `App::get_matches` startup sequence.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use frank2::cli;

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"));

    let app = cli::build_app();
    let matches = match app.get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => {
            eprint!("{e}");
            return if e.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
        }
    };

    let opts = match cli::parse_options(&matches) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("frank2: {message}");
            return ExitCode::from(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match frank2::driver::run(stdin.lock(), stdout.lock(), stderr.lock(), &opts) {
        Ok(_stats) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(io::stderr(), "frank2: I/O error: {e}");
            ExitCode::from(1)
        }
    }
}
