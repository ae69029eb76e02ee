pub mod shapes;

pub use shapes::{Aabb, Rectangle, Vector, Vector2};
