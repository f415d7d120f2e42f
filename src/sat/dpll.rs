use std::cmp::Reverse;

use super::assignment::Assignment;
use super::clause::Clause;
use super::formula::Formula;
use super::lit::Lit;
use super::propagation::Propagation;

/// Terminal outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Sat(Assignment),
    Unsat,
}

impl Solution {
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub branches: usize,
    pub contradictions: usize,
    pub max_depth: usize,
}

/// Classical DPLL over copies of a [`Formula`].
///
/// The search is depth first over an explicit stack of pending states.
/// At a branch point both children are pushed, the `{lit}` child last, so
/// it and everything under it is explored before the `{¬lit}` child is
/// popped.
#[derive(Debug, Clone)]
pub struct Solver {
    formula: Formula,
    stats: Stats,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self {
            formula,
            stats: Stats::default(),
        }
    }

    /// Picks the literal indexing the most clauses, preferring the lowest
    /// variable and then its positive occurrence on ties.
    pub fn choose_literal(formula: &Formula) -> Option<Lit> {
        formula
            .literals()
            .into_iter()
            .min_by_key(|lit| (Reverse(formula.count(lit)), *lit))
    }

    fn dpll(&mut self) -> Solution {
        if self.formula.has_empty_clause() {
            log::debug!("Input holds an empty clause. Failing.");
            return Solution::Unsat;
        }
        let root = self.formula.clone();
        let mut stack = vec![(root, 0usize)];
        while let Some((mut formula, depth)) = stack.pop() {
            self.stats.max_depth = self.stats.max_depth.max(depth);
            if formula.simplify() == Propagation::Contradiction {
                log::debug!("Contradiction at depth {depth}. Backtracking.");
                self.stats.contradictions += 1;
                continue;
            }
            let Some(lit) = Self::choose_literal(&formula) else {
                debug_assert!(formula.is_empty());
                if formula.is_satisfied() {
                    log::debug!("All clauses satisfied at depth {depth}");
                    return Solution::Sat(formula.into_assignment());
                }
                log::debug!("Index emptied without satisfying every clause");
                self.stats.contradictions += 1;
                continue;
            };
            log::debug!(
                "Branching on {lit} ({} clauses) at depth {depth}",
                formula.count(&lit)
            );
            self.stats.branches += 1;
            let mut left = formula.clone();
            let mut right = formula;
            left.add_clause(Clause::unit(lit));
            right.add_clause(Clause::unit(lit.complement()));
            stack.push((right, depth + 1));
            stack.push((left, depth + 1));
        }
        Solution::Unsat
    }

    pub fn run_with_stats(mut self) -> (Solution, Stats) {
        let solution = self.dpll();
        log::info!(
            "Search finished: {} branches, {} contradictions, max depth {}",
            self.stats.branches,
            self.stats.contradictions,
            self.stats.max_depth
        );
        (solution, self.stats)
    }

    pub fn run(self) -> Solution {
        self.run_with_stats().0
    }
}
