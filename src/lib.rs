pub mod iter;
pub mod node;
pub mod tree;

pub use iter::{Cursor, Iter};
pub use tree::Tree;
