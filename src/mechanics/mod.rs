pub mod capacity;
pub mod partition;

pub use capacity::*;
pub use partition::*;
