use std::fmt::{self, Display};

/// A variable id in `1..=num_vars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var {
    id: u32,
}

impl Var {
    pub fn new(id: u32) -> Self {
        debug_assert!(id > 0, "variable ids start at 1");
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn index(&self) -> usize {
        self.id as usize
    }
}

/// A signed occurrence of a variable.
///
/// Literals order by variable id first and then put the positive
/// occurrence before the negated one. Every deterministic choice the
/// solver makes (pure literal sweeps, unit selection, branching ties)
/// follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    var: Var,
    negated: bool,
}

impl Lit {
    pub fn pos(var: Var) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    pub fn neg(var: Var) -> Self {
        Self { var, negated: true }
    }

    /// Builds a literal from its DIMACS encoding. `0` is the clause
    /// terminator and has no literal.
    pub fn from_dimacs(value: i32) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let var = Var::new(value.unsigned_abs());
        if value > 0 {
            Some(Self::pos(var))
        } else {
            Some(Self::neg(var))
        }
    }

    pub fn get_var(&self) -> Var {
        self.var
    }

    #[cfg(test)]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The truth value the variable takes when this literal is made true.
    pub fn polarity(&self) -> bool {
        !self.negated
    }

    pub fn complement(&self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "-{}", self.var.id)
        } else {
            write!(f, "{}", self.var.id)
        }
    }
}
