pub mod traits;
pub mod builder;
pub mod directed;
pub mod restricted;
pub mod generators;

pub use traits::Graph;
pub use builder::{GraphBuilder, ParallelEdges};
pub use directed::DirectedGraph;
pub use restricted::RestrictedGraph;
