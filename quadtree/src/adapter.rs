use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;

/// Maps an element to its current bounding box.
///
/// The tree never caches the answer across calls: every `insert`, `update`
/// and `search` samples the adapter again, so geometry may change freely
/// between calls as long as `QuadTree::update` is invoked afterwards.
/// Implementations should be pure; returning `None` for an element the tree
/// is asked to place or scan is reported as [`QuadtreeError::MissingBounds`].
pub trait BoundsAdapter<T: ?Sized> {
    fn bounds(&self, id: &T) -> Option<Rectangle>;
}

impl<T: ?Sized, F> BoundsAdapter<T> for F
where
    F: Fn(&T) -> Option<Rectangle>,
{
    #[inline]
    fn bounds(&self, id: &T) -> Option<Rectangle> {
        self(id)
    }
}

#[inline]
pub(crate) fn sample<T: ?Sized>(
    adapter: &dyn BoundsAdapter<T>,
    id: &T,
) -> QuadtreeResult<Rectangle> {
    adapter.bounds(id).ok_or(QuadtreeError::MissingBounds)
}
