use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use smallvec::SmallVec;

/// Stable index of a node inside the arena. The root is always slot 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        NodeId(index as u32)
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

pub(crate) type NodeStack = SmallVec<[NodeId; 64]>;

/// Index of the single quadrant of `bounds` that fully contains `extent`.
///
/// `None` when the extent straddles the center, lies (partly) outside
/// `bounds`, or is degenerate on the center lines so that several quadrants
/// contain it at once.
#[inline(always)]
pub(crate) fn quadrant_containing(bounds: &Rectangle, extent: &Rectangle) -> Option<usize> {
    let mut single = None;
    for i in 0..4 {
        if bounds.quadrant(i).contains(extent) {
            if single.is_some() {
                return None;
            }
            single = Some(i);
        }
    }
    single
}

pub(crate) fn validate_rect_extent(rect: &Rectangle) -> QuadtreeResult<()> {
    if !rect.is_valid() {
        return Err(QuadtreeError::InvalidRectExtent {
            min_x: rect.lower.x(),
            min_y: rect.lower.y(),
            max_x: rect.upper.x(),
            max_y: rect.upper.y(),
        });
    }
    Ok(())
}

pub(crate) fn validate_min_size(min_size: f32) -> QuadtreeResult<()> {
    if !(min_size.is_finite() && min_size >= 0.0) {
        return Err(QuadtreeError::InvalidMinSize { min_size });
    }
    Ok(())
}
