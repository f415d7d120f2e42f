use std::fmt::{self, Display};

use super::dpll::Solution;

/// The solver's answer in DIMACS output form.
pub struct Report<'a> {
    name: &'a str,
    version: &'a str,
    solution: &'a Solution,
}

impl<'a> Report<'a> {
    pub fn new(name: &'a str, version: &'a str, solution: &'a Solution) -> Self {
        Self {
            name,
            version,
            solution,
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "c {} {}", self.name, self.version)?;
        match self.solution {
            Solution::Sat(assignment) => {
                writeln!(f, "s SATISFIABLE")?;
                writeln!(f, "{assignment}")
            }
            Solution::Unsat => writeln!(f, "s UNSATISFIABLE"),
        }
    }
}
