use super::types::validate_min_size;
use crate::error::QuadtreeResult;
use common::shapes::Rectangle;

#[derive(Debug, Clone)]
pub struct Config {
    /// Initial capacity of the node arena and the placement index.
    pub pool_size: usize,
    /// Deepest level a node may sit at (the root is level 0). Elements that
    /// would fit further down are kept at this level instead.
    pub max_depth: usize,
    /// Quadrants narrower or shorter than this are never created.
    /// Zero disables the check.
    pub min_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pool_size: 64,
            // Past ~32 halvings an f32 quadrant has no room left to split.
            max_depth: 32,
            min_size: 0.0,
        }
    }
}

impl Config {
    pub(crate) fn validate(&self) -> QuadtreeResult<()> {
        validate_min_size(self.min_size)
    }

    #[inline(always)]
    pub(crate) fn allows_quadrant(&self, quadrant: &Rectangle) -> bool {
        self.min_size <= 0.0
            || (quadrant.width() >= self.min_size && quadrant.height() >= self.min_size)
    }
}
