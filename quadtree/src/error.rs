use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "rectangle extents must be finite with min <= max (min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y})"
    )]
    InvalidRectExtent {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },
    #[error("bounds adapter returned no rectangle for the element")]
    MissingBounds,
    #[error("min_size must be finite and non-negative (min_size: {min_size})")]
    InvalidMinSize { min_size: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
