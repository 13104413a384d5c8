pub mod node;
pub mod slice;

pub use node::*;
pub use slice::*;
