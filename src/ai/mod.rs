//! Computer opponents: the agent seam, the minimax search with its window
//! evaluator, and the random fallback.

mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{Heuristic, MinimaxAgent, WindowHeuristic};
pub use random::RandomAgent;
