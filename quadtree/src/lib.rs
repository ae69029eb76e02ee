pub mod adapter;
pub mod error;
pub mod quadtree;
pub mod set;

pub use adapter::BoundsAdapter;
pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, Cursor, Iter, QuadTree};
pub use set::{unordered_hash, MutableSet};
