/// Directional path walking and shortest path lengths
pub mod path;
/// Rule application to single positions and whole components
pub mod propagation;
/// Priority-ordered color-transition rules with hit counters
pub mod rules;
/// Session owning the plane and its rule set
pub mod session;
/// Breadth-first traversal with visitor control
pub mod traversal;

pub use session::Session;
