/// Per-tile neighbour compatibility tables
pub mod adjacency;
/// Efficient bitset implementation for tile option sets
pub mod bitset;
/// Whole-grid constraint rebuild after each collapse
pub mod propagation;
/// Minimum-entropy cell selection and random choice
pub mod selection;
/// Step-driven collapse solver with contradiction restarts
pub mod solver;

pub use adjacency::{AdjacencyTable, EdgeMatch};
pub use selection::{ChoiceSource, RandomSelector};
pub use solver::{Solver, StepOutcome};
