pub mod dijkstra;
pub mod path;
pub mod relaxation;
pub mod source;

pub use dijkstra::{Dijkstra, ShortestPathResult};
pub use path::{path_length, path_to};
pub use relaxation::{ConvergenceRule, PassMode, PassStats, RelaxationEngine, RelaxationOutcome};
pub use source::find_and_seed_source;
