use std::fmt::{self, Display};

use itertools::Itertools;

use super::lit::{Lit, Var};

/// Truth values for every declared variable.
///
/// Variables start out true; propagation and branching overwrite them
/// before the final satisfaction check reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    // slot 0 is unused so variable ids index directly
    values: Vec<bool>,
}

impl Assignment {
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: vec![true; num_vars + 1],
        }
    }

    pub fn num_vars(&self) -> usize {
        self.values.len() - 1
    }

    pub fn set(&mut self, var: Var, value: bool) {
        assert!(
            var.index() <= self.num_vars(),
            "variable {} outside of 1..={}",
            var.id(),
            self.num_vars()
        );
        self.values[var.index()] = value;
    }

    pub fn value(&self, var: Var) -> bool {
        self.values[var.index()]
    }

    /// Makes `lit` true.
    pub fn assign(&mut self, lit: Lit) {
        self.set(lit.get_var(), lit.polarity());
    }

    pub fn lit_value(&self, lit: Lit) -> bool {
        self.value(lit.get_var()) == lit.polarity()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(id, value)| (Var::new(id as u32), *value))
    }

    /// The assignment as signed DIMACS integers in variable order.
    pub fn as_dimacs(&self) -> Vec<i64> {
        self.iter()
            .map(|(var, value)| {
                let id = i64::from(var.id());
                if value {
                    id
                } else {
                    -id
                }
            })
            .collect()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_vars() == 0 {
            return write!(f, "v 0");
        }
        write!(f, "v {} 0", self.as_dimacs().iter().join(" "))
    }
}
