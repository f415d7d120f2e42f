pub mod assignment;
pub mod clause;
pub mod dimacs;
pub mod dpll;
pub mod formula;
pub mod lit;
pub mod propagation;
pub mod report;
