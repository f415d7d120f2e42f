use super::assignment::Assignment;
use super::lit::Lit;

/// A disjunction of literals.
///
/// Literals are kept sorted and deduplicated so two clauses over the same
/// set of literals are equal and hash the same.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    lits: Vec<Lit>,
}

impl Clause {
    pub fn new(mut lits: Vec<Lit>) -> Self {
        lits.sort_unstable();
        lits.dedup();
        Self { lits }
    }

    pub fn unit(lit: Lit) -> Self {
        Self { lits: vec![lit] }
    }

    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.lits.len() == 1
    }

    pub fn unit_lit(&self) -> Option<Lit> {
        match self.lits.as_slice() {
            [lit] => Some(*lit),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn contains(&self, lit: &Lit) -> bool {
        self.lits.binary_search(lit).is_ok()
    }

    /// True when the clause holds some literal together with its complement.
    pub fn is_tautology(&self) -> bool {
        // sorted order puts `x` directly before `-x`
        self.lits
            .windows(2)
            .any(|pair| pair[0].complement() == pair[1])
    }

    /// The clause with `lit` struck out.
    pub fn without(&self, lit: &Lit) -> Self {
        Self {
            lits: self.lits.iter().filter(|l| *l != lit).copied().collect(),
        }
    }

    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.lits.iter().any(|lit| assignment.lit_value(*lit))
    }
}

#[cfg(test)]
mod clause_test {
    use super::Clause;
    use crate::sat::assignment::Assignment;
    use crate::sat::lit::{Lit, Var};

    fn clause(lits: &[i32]) -> Clause {
        Clause::new(lits.iter().filter_map(|l| Lit::from_dimacs(*l)).collect())
    }

    #[test]
    fn equal_as_sets() {
        assert_eq!(clause(&[3, -1, 2]), clause(&[2, 3, -1, 3]));
        assert_eq!(clause(&[1, 1]).len(), 1);
    }

    #[test]
    fn tautology_detection() {
        assert!(clause(&[1, -1, 2]).is_tautology());
        assert!(clause(&[-3, 2, 3]).is_tautology());
        assert!(!clause(&[1, 2, -3]).is_tautology());
        assert!(!clause(&[-1]).is_tautology());
    }

    #[test]
    fn without_strikes_one_literal() {
        let c = clause(&[1, -2, 3]);
        let shrunk = c.without(&Lit::neg(Var::new(2)));
        assert_eq!(shrunk, clause(&[1, 3]));
        assert!(!shrunk.contains(&Lit::neg(Var::new(2))));
        assert!(shrunk.contains(&Lit::pos(Var::new(3))));
        let unit = shrunk.without(&Lit::pos(Var::new(1)));
        assert_eq!(unit.unit_lit(), Some(Lit::pos(Var::new(3))));
        assert!(unit.without(&Lit::pos(Var::new(3))).is_empty());
    }

    #[test]
    fn satisfaction() {
        let mut assignment = Assignment::new(2);
        let c = clause(&[-1, -2]);
        assert!(!c.is_satisfied(&assignment));
        assignment.set(Var::new(2), false);
        assert!(c.is_satisfied(&assignment));
        assert!(!clause(&[]).is_satisfied(&assignment));
    }
}
