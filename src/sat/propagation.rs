use super::formula::Formula;

/// Outcome of a simplification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Progress,
    /// An empty clause was derived, the current state has no model.
    Contradiction,
}

impl Formula {
    /// Assigns every pure literal and drops the clauses it satisfies.
    ///
    /// Each sweep works on a snapshot of the indexed literals. Removing the
    /// clauses of one pure literal can make others pure, so sweeps repeat
    /// until one finds nothing.
    pub fn pure_literal_elimination(&mut self) {
        loop {
            let mut eliminated = 0;
            for lit in self.literals() {
                if self.count(&lit) == 0 || self.count(&lit.complement()) > 0 {
                    continue;
                }
                log::debug!("Pure literal {lit}");
                self.assign(lit);
                self.remove_all_clauses_containing(lit);
                eliminated += 1;
            }
            if eliminated == 0 {
                break;
            }
        }
    }

    /// Propagates unit clauses until none are left.
    ///
    /// Units created by striking literals from longer clauses are picked up
    /// by the same call.
    pub fn unit_propagation(&mut self) -> Propagation {
        while let Some(lit) = self.next_unit() {
            log::debug!("Propagating unit {lit}");
            self.assign(lit);
            self.remove_all_clauses_containing(lit);
            if self.eliminate_literal_from_clauses(lit.complement()) == Propagation::Contradiction {
                log::debug!("Unit {lit} led to a contradiction");
                return Propagation::Contradiction;
            }
        }
        Propagation::Progress
    }

    pub fn simplify(&mut self) -> Propagation {
        self.pure_literal_elimination();
        self.unit_propagation()
    }
}
