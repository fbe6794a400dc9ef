pub mod candidate_frontier;
pub mod priority_queue;

pub use candidate_frontier::{Candidate, CandidateFrontier};
pub use priority_queue::BinaryHeapWrapper;
