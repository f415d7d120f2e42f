use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::clause::Clause;
use super::formula::Formula;
use super::lit::Lit;

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: malformed problem line `{text}`")]
    InvalidHeader { line: usize, text: String },
    #[error("line {line}: second `p cnf` line")]
    DuplicateHeader { line: usize },
    #[error("line {line}: clause given before the `p cnf` line")]
    MissingHeader { line: usize },
    #[error("line {line}: `{token}` is not a literal")]
    InvalidLiteral { line: usize, token: String },
    #[error("line {line}: variable {var} outside of 1..={num_vars}")]
    VariableOutOfRange { line: usize, var: u32, num_vars: usize },
}

pub fn parse_dimacs_file(path: &Path) -> Result<Formula, DimacsError> {
    let contents = fs::read_to_string(path)?;
    parse_dimacs_str(&contents)
}

fn parse_header(line: usize, trimmed: &str) -> Result<usize, DimacsError> {
    let invalid = || DimacsError::InvalidHeader {
        line,
        text: trimmed.to_string(),
    };
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts.as_slice() {
        ["p", "cnf", vars, clauses] => {
            // the clause count is read but never checked against the body
            clauses.parse::<usize>().map_err(|_| invalid())?;
            // variable ids are u32
            let vars = vars.parse::<u32>().map_err(|_| invalid())?;
            usize::try_from(vars)
                .ok()
                .filter(|vars| vars.checked_add(1).is_some())
                .ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}

pub fn parse_dimacs_str(lines: &str) -> Result<Formula, DimacsError> {
    let mut num_vars = None;
    let mut clauses = Vec::new();
    let mut collector = Vec::new();

    for (line, text) in lines.lines().enumerate() {
        let line = line + 1;
        let trimmed = text.trim();

        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        if trimmed.starts_with('p') {
            if num_vars.is_some() {
                return Err(DimacsError::DuplicateHeader { line });
            }
            num_vars = Some(parse_header(line, trimmed)?);
            continue;
        }
        let Some(num_vars) = num_vars else {
            return Err(DimacsError::MissingHeader { line });
        };

        for token in trimmed.split_whitespace() {
            let value = token
                .parse::<i32>()
                .map_err(|_| DimacsError::InvalidLiteral {
                    line,
                    token: token.to_string(),
                })?;
            let Some(lit) = Lit::from_dimacs(value) else {
                // End of clause
                clauses.push(Clause::new(std::mem::take(&mut collector)));
                continue;
            };
            let var = lit.get_var().id();
            if var as usize > num_vars {
                return Err(DimacsError::VariableOutOfRange {
                    line,
                    var,
                    num_vars,
                });
            }
            collector.push(lit);
        }
    }
    // accept a last clause missing its terminating 0
    if !collector.is_empty() {
        clauses.push(Clause::new(collector));
    }

    log::debug!("Parsed {} clauses", clauses.len());
    Ok(Formula::new(num_vars.unwrap_or(0), clauses))
}
