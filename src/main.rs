use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use sat::{dimacs::parse_dimacs_file, dpll::Solver, report::Report};

mod sat;

/// Decides satisfiability of a DIMACS CNF formula
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CNF file to solve
    file: PathBuf,
}

/// Exit status for a failed argument parse. Help and version requests
/// succeed, every usage error exits with 1.
fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(usage_exit_code(e.kind()));
        }
    };

    let formula = match parse_dimacs_file(&args.file) {
        Ok(formula) => formula,
        Err(e) => {
            log::error!("Failed to load {:?}: {e:?}", args.file);
            eprintln!("Failed to load {}: {e}", args.file.display());
            process::exit(1);
        }
    };
    log::info!(
        "Loaded {} clauses over {} variables",
        formula.num_clauses(),
        formula.num_vars()
    );

    let solution = Solver::new(formula).run();
    log::info!("Satisfiable: {}", solution.is_sat());
    print!(
        "{}",
        Report::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &solution)
    );
}

#[cfg(test)]
mod main_test {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{usage_exit_code, Args};

    fn exit_code(argv: &[&str]) -> Option<i32> {
        Args::try_parse_from(argv.iter().copied())
            .err()
            .map(|e| usage_exit_code(e.kind()))
    }

    #[test]
    fn missing_file_exits_with_one() {
        assert_eq!(exit_code(&["dpll-sat"]), Some(1));
    }

    #[test]
    fn extra_argument_exits_with_one() {
        assert_eq!(exit_code(&["dpll-sat", "a.cnf", "b.cnf"]), Some(1));
    }

    #[test]
    fn help_and_version_exit_cleanly() {
        assert_eq!(exit_code(&["dpll-sat", "--help"]), Some(0));
        assert_eq!(exit_code(&["dpll-sat", "--version"]), Some(0));
    }

    #[test]
    fn single_path_parses() {
        let args = Args::try_parse_from(["dpll-sat", "x.cnf"]).unwrap();
        assert_eq!(args.file, PathBuf::from("x.cnf"));
        assert_eq!(exit_code(&["dpll-sat", "x.cnf"]), None);
    }
}
