pub mod cnf;
pub mod coloring;
pub mod driver;
pub mod graph;
