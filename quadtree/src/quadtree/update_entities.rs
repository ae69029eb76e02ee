use super::*;
use crate::adapter::sample;
use crate::error::QuadtreeResult;
use std::hash::Hash;
use tracing::trace;

impl<T> QuadTree<T>
where
    T: Eq + Hash + Clone,
{
    /// Re-samples the adapter for `id` and moves it if its node changed.
    ///
    /// Placement is recomputed from the root, so an element may move up,
    /// down or sideways. Returns `Ok(true)` only when the owning node
    /// differs; a changed box that maps to the same node reports `Ok(false)`.
    /// Absent ids report `Ok(false)` without touching the adapter.
    pub fn update(&mut self, id: &T) -> QuadtreeResult<bool> {
        let current = match self.owner_map.owner_lookup(id) {
            Some(node) => node,
            None => return Ok(false),
        };
        let extent = sample(&*self.adapter, id)?;
        let target = self.locate(&extent);
        if target == current {
            return Ok(false);
        }

        let stored = match self.nodes.unlink(current, id) {
            Some(stored) => stored,
            None => {
                debug_assert!(false, "placement index out of sync with node members");
                return Ok(false);
            }
        };
        self.nodes.link(target, stored);
        self.owner_map.owner_move(id, target);
        trace!(
            from_depth = self.nodes.get(current).depth,
            to_depth = self.nodes.get(target).depth,
            "relocated element"
        );
        Ok(true)
    }

    /// Runs [`QuadTree::update`] on every id, stopping at the first adapter
    /// failure. Moves made before the failure are kept.
    pub fn update_all<'a, I>(&mut self, ids: I) -> QuadtreeResult<bool>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut moved = false;
        for id in ids {
            moved |= self.update(id)?;
        }
        Ok(moved)
    }
}
