use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

use itertools::Itertools;

use super::assignment::Assignment;
use super::clause::Clause;
use super::lit::Lit;
use super::propagation::Propagation;

/// The clause database searched by the solver.
///
/// Every clause currently alive is indexed under each of its literals.
/// Clauses of length one are additionally kept in `unit_clauses`. The
/// parsed clauses are shared untouched between every copy of the state
/// and are only read by the final satisfaction check.
#[derive(Debug, Clone)]
pub struct Formula {
    // lit to the clauses that currently contain it
    index: HashMap<Lit, HashSet<Clause>>,
    unit_clauses: BTreeSet<Clause>,
    original: Rc<Vec<Clause>>,
    assignment: Assignment,
    has_empty_clause: bool,
}

impl Formula {
    pub fn new(num_vars: usize, clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut original = Vec::new();
        let mut has_empty_clause = false;
        for clause in clauses {
            if clause.is_tautology() {
                log::debug!("Dropping tautological clause {:?}", clause.lits());
                continue;
            }
            if clause.is_empty() {
                log::debug!("Found an empty input clause");
                has_empty_clause = true;
            }
            original.push(clause);
        }
        original.sort_unstable();
        original.dedup();

        let mut formula = Self {
            index: HashMap::new(),
            unit_clauses: BTreeSet::new(),
            original: Rc::new(Vec::new()),
            assignment: Assignment::new(num_vars),
            has_empty_clause,
        };
        for clause in original.iter().filter(|c| !c.is_empty()) {
            formula.add_clause(clause.clone());
        }
        formula.original = Rc::new(original);
        formula
    }

    pub fn add_clause(&mut self, clause: Clause) {
        debug_assert!(!clause.is_empty(), "empty clauses are never indexed");
        debug_assert!(!clause.is_tautology(), "tautologies are never indexed");
        for lit in clause.lits() {
            self.index
                .entry(*lit)
                .and_modify(|e| {
                    e.insert(clause.clone());
                })
                .or_insert_with(|| HashSet::from([clause.clone()]));
        }
        if clause.is_unit() {
            self.unit_clauses.insert(clause);
        }
    }

    pub fn remove_clause(&mut self, clause: &Clause) {
        for lit in clause.lits() {
            let Some(clauses) = self.index.get_mut(lit) else {
                debug_assert!(false, "removing unindexed clause {clause:?}");
                log::error!("Clause {clause:?} is not indexed under {lit}");
                continue;
            };
            let removed = clauses.remove(clause);
            debug_assert!(removed, "removing unindexed clause {clause:?}");
            if clauses.is_empty() {
                self.index.remove(lit);
            }
        }
        if clause.is_unit() {
            self.unit_clauses.remove(clause);
        }
    }

    /// Drops every clause satisfied by making `lit` true.
    pub fn remove_all_clauses_containing(&mut self, lit: Lit) {
        if let Some(clauses) = self.index.get(&lit) {
            let satisfied: Vec<Clause> = clauses.iter().cloned().collect();
            log::debug!("Removing {} clauses satisfied by {lit}", satisfied.len());
            for clause in satisfied.iter() {
                self.remove_clause(clause);
            }
        }
    }

    /// Strikes the now false `lit` from every clause holding it.
    ///
    /// Returns `Propagation::Contradiction` as soon as a clause would be
    /// left empty. The clause that would become empty is left in place.
    pub fn eliminate_literal_from_clauses(&mut self, lit: Lit) -> Propagation {
        let Some(clauses) = self.index.get(&lit) else {
            return Propagation::Progress;
        };
        let falsified: Vec<Clause> = clauses.iter().cloned().sorted().collect();
        for clause in falsified {
            let shrunk = clause.without(&lit);
            if shrunk.is_empty() {
                log::debug!("Striking {lit} empties a clause");
                return Propagation::Contradiction;
            }
            self.remove_clause(&clause);
            self.add_clause(shrunk);
        }
        Propagation::Progress
    }

    #[cfg(test)]
    pub fn clauses_containing(&self, lit: &Lit) -> Option<&HashSet<Clause>> {
        self.index.get(lit)
    }

    /// Number of live clauses indexed under `lit`.
    pub fn count(&self, lit: &Lit) -> usize {
        self.index.get(lit).map_or(0, HashSet::len)
    }

    /// Sorted snapshot of every literal that indexes at least one clause.
    pub fn literals(&self) -> Vec<Lit> {
        self.index.keys().copied().sorted().collect()
    }

    /// The smallest unit clause's literal, if any unit clause is alive.
    pub fn next_unit(&self) -> Option<Lit> {
        self.unit_clauses.first().and_then(Clause::unit_lit)
    }

    #[cfg(test)]
    pub fn unit_clauses(&self) -> &BTreeSet<Clause> {
        &self.unit_clauses
    }

    /// True when no live clause remains.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn num_clauses(&self) -> usize {
        self.index.values().flatten().unique().count()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.has_empty_clause
    }

    #[cfg(test)]
    pub fn original_clauses(&self) -> &[Clause] {
        &self.original
    }

    pub fn num_vars(&self) -> usize {
        self.assignment.num_vars()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub(crate) fn assign(&mut self, lit: Lit) {
        self.assignment.assign(lit);
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }

    /// Checks every parsed clause against the current assignment.
    pub fn is_satisfied(&self) -> bool {
        self.original
            .iter()
            .all(|clause| clause.is_satisfied(&self.assignment))
    }
}
